/// Normalize a user-supplied Jira domain.
///
/// Strips a leading `http://` or `https://` and a single trailing `/`,
/// e.g. `"https://foo.atlassian.net/"` -> `"foo.atlassian.net"`.
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();
    let without_scheme = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .unwrap_or(domain);
    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}

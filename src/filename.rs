use url::Url;

const EXTENSION: &str = ".md";
const FALLBACK: &str = "output.md";

/// Derives a flat, filesystem-safe Markdown file name from a URL.
///
/// The host (with its port, when the URL names a non-default one) and the
/// first path segment are joined with `_`; anything outside
/// `[A-Za-z0-9_.-]` becomes `_`, runs of `_` collapse and the ends are trimmed.
/// Strings that are not absolute URLs are treated as a bare path.
pub fn derive_filename(url: &str) -> String {
    let (host, path) = match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            let host = match parsed.port() {
                Some(port) => format!("{host}_{port}"),
                None => host.to_string(),
            };
            (host, parsed.path().to_string())
        }
        Err(_) => (String::new(), url.to_string()),
    };

    let mut name = flatten(&host);
    if !path.is_empty() && path != "/" {
        let segment = path.trim_matches('/').split('/').next().unwrap_or_default();
        name = format!("{name}_{}", flatten(segment));
    }
    name.push_str(EXTENSION);

    let name = sanitize(&name);
    if name == EXTENSION {
        FALLBACK.to_string()
    } else {
        name
    }
}

fn flatten(part: &str) -> String {
    part.replace(['.', '-'], "_")
}

fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        let ch = if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-') {
            ch
        } else {
            '_'
        };
        if ch == '_' && out.ends_with('_') {
            continue;
        }
        out.push(ch);
    }
    out.trim_matches('_').to_string()
}

use mockito::{Mock, Server};

/// A post page with boilerplate, a table and an image inside `<article>`.
#[allow(dead_code)]
pub fn post_html(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title}</title></head>
<body>
  <div class="widget"><h4>Categories:</h4><a href="/category/aws">AWS</a></div>
  <article>
    <h1>{title}</h1>
    <p>Amazon EC2 provides resizable compute capacity.</p>
    <table>
      <tr><th>Instance</th><th>Memory</th></tr>
      <tr><td>t3.small</td><td>2 GiB</td></tr>
    </table>
    <img src="/images/ec2.png" alt="EC2 diagram">
    <p>Closing paragraph.</p>
  </article>
</body>
</html>"#
    )
}

/// A listing page whose grid links to the given hrefs.
#[allow(dead_code)]
pub fn listing_html(hrefs: &[&str]) -> String {
    let cards: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<article class="post"><div class="ratio-wrap"><a href="{href}"><img src="thumb.jpg"></a></div></article>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><nav><a href="/about">About</a></nav><div class="post-grid bb-grid">{cards}</div></body></html>"#
    )
}

#[allow(dead_code)]
pub fn html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create()
}

#[allow(dead_code)]
pub fn status_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server.mock("GET", path).with_status(status).create()
}

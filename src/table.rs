use scraper::ElementRef;

const ROW_GROUPS: &[&str] = &["thead", "tbody", "tfoot"];

/// Renders a `<table>` as a pipe table. The first row is the header; later
/// rows keep their own cell count. Cell text is not escaped.
///
/// Only the table's own rows and cells are used; a nested table contributes
/// its text to the cell that holds it.
pub fn table_to_markdown(table: ElementRef<'_>) -> String {
    table_to_markdown_with(table, |cell| cell.text().collect())
}

/// Like [`table_to_markdown`], with the raw text of each cell produced by
/// `cell_text` and then trimmed.
pub(crate) fn table_to_markdown_with(
    table: ElementRef<'_>,
    cell_text: impl Fn(ElementRef<'_>) -> String,
) -> String {
    let rows: Vec<Vec<String>> = own_rows(table)
        .into_iter()
        .map(|row| {
            child_elements(row)
                .filter(|cell| matches!(cell.value().name(), "th" | "td"))
                .map(|cell| cell_text(cell).trim().to_string())
                .collect()
        })
        .collect();

    let Some((header, body)) = rows.split_first() else {
        return String::new();
    };

    let mut markdown = markdown_row(header);
    markdown.push_str(&markdown_row(&vec!["---".to_string(); header.len()]));
    for row in body {
        markdown.push_str(&markdown_row(row));
    }
    markdown
}

fn own_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in child_elements(table) {
        match child.value().name() {
            "tr" => rows.push(child),
            name if ROW_GROUPS.contains(&name) => {
                rows.extend(child_elements(child).filter(|row| row.value().name() == "tr"));
            }
            _ => {}
        }
    }
    rows
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn markdown_row(cells: &[String]) -> String {
    format!("| {} |\n", cells.join(" | "))
}

use crate::page::{Element, Page, Slot};

/// Renders the page model back into the admin-table markup the buttons came
/// from. Live buttons come out as `<button>` tags, acted slots as whatever
/// content replaced them.
pub fn render_page(page: &Page) -> String {
    let mut out = String::from(
        "<div style=\"display: flex; gap: 5px; justify-content: center; align-items: center;\">\n",
    );
    for slot in page.slots() {
        out.push_str("    ");
        match slot {
            Slot::Button(element) => out.push_str(&render_button(element)),
            Slot::Replaced(html) => out.push_str(html),
        }
        out.push('\n');
    }
    out.push_str("</div>\n");
    out
}

fn render_button(element: &Element) -> String {
    let mut tag = String::from("<button type=\"button\"");
    if !element.classes.is_empty() {
        tag.push_str(&format!(" class=\"{}\"", element.classes.join(" ")));
    }
    for (name, value) in &element.attrs {
        tag.push_str(&format!(" {name}=\"{value}\""));
    }
    if !element.styles.is_empty() {
        let style = element
            .styles
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        tag.push_str(&format!(" style=\"{style}\""));
    }
    tag.push_str(&format!(">{}</button>", element.text));
    tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_button_with_class_data_url_and_style() {
        let mut page = Page::new();
        let mut element = Element::new("Подтвердить", &["button-confirm"]);
        element.set_attr("data-url", "/checkin/42/confirm");
        element.set_attr("data-id", "42");
        element.set_style("background-color", "#28a745");
        page.push_button(element);

        let html = render_page(&page);
        assert!(html.contains("class=\"button-confirm\""));
        assert!(html.contains("data-url=\"/checkin/42/confirm\""));
        assert!(html.contains("data-id=\"42\""));
        assert!(html.contains("style=\"background-color: #28a745;\""));
        assert!(html.contains(">Подтвердить</button>"));
    }

    #[test]
    fn renders_replaced_slot_verbatim() {
        let mut page = Page::new();
        let slot = page.push_button(Element::new("Подтвердить", &["button-confirm"]));
        page.replace_content(slot, "<span>Подтверждено</span>".to_string());

        let html = render_page(&page);
        assert!(html.contains("<span>Подтверждено</span>"));
        assert!(!html.contains("<button"));
    }
}

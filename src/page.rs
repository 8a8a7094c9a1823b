use std::collections::BTreeMap;

/// One server-rendered element: class list, attributes, text content and
/// inline styles. Stands in for the DOM node the markup produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    pub styles: BTreeMap<String, String>,
}

impl Element {
    pub fn new(text: &str, classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|class| class.to_string()).collect(),
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    pub fn set_style(&mut self, name: &str, value: &str) {
        self.styles.insert(name.to_string(), value.to_string());
    }

    /// The request target carried by the markup. No fallback when absent.
    pub fn data_url(&self) -> Option<&str> {
        self.attrs.get("data-url").map(String::as_str)
    }
}

/// A position in the page: a live button, or raw markup once the
/// content-replacement treatment has fired for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Button(Element),
    Replaced(String),
}

/// Ordered collection of slots scanned out of the server-rendered page.
/// Queries see live buttons only, so replaced slots drop out of selector
/// matching the way the swapped-out markup does.
#[derive(Debug, Clone, Default)]
pub struct Page {
    slots: Vec<Slot>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a button and returns its slot index.
    pub fn push_button(&mut self, element: Element) -> usize {
        self.slots.push(Slot::Button(element));
        self.slots.len() - 1
    }

    /// Slot indices of live buttons carrying `class`, in page order.
    pub fn query_class(&self, class: &str) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, node)| match node {
                Slot::Button(element) if element.has_class(class) => Some(slot),
                _ => None,
            })
            .collect()
    }

    pub fn button(&self, slot: usize) -> Option<&Element> {
        match self.slots.get(slot) {
            Some(Slot::Button(element)) => Some(element),
            _ => None,
        }
    }

    pub fn button_mut(&mut self, slot: usize) -> Option<&mut Element> {
        match self.slots.get_mut(slot) {
            Some(Slot::Button(element)) => Some(element),
            _ => None,
        }
    }

    /// Swaps the slot's content for raw markup, the `parent.innerHTML`
    /// equivalent. The button at that slot is gone afterwards.
    pub fn replace_content(&mut self, slot: usize, html: String) {
        if let Some(node) = self.slots.get_mut(slot) {
            *node = Slot::Replaced(html);
        }
    }

    pub fn replaced(&self, slot: usize) -> Option<&str> {
        match self.slots.get(slot) {
            Some(Slot::Replaced(html)) => Some(html),
            _ => None,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_class_returns_matching_buttons_in_order() {
        let mut page = Page::new();
        let first = page.push_button(Element::new("Подтвердить", &["button-confirm"]));
        page.push_button(Element::new("Отменить", &["button-cancel"]));
        let second = page.push_button(Element::new("Подтвердить", &["button-confirm"]));

        assert_eq!(page.query_class("button-confirm"), vec![first, second]);
    }

    #[test]
    fn replaced_slots_drop_out_of_queries() {
        let mut page = Page::new();
        let slot = page.push_button(Element::new("Подтвердить", &["button-confirm"]));
        page.replace_content(slot, "<span>Подтверждено</span>".to_string());

        assert!(page.query_class("button-confirm").is_empty());
        assert_eq!(page.button(slot), None);
        assert_eq!(page.replaced(slot), Some("<span>Подтверждено</span>"));
    }

    #[test]
    fn data_url_reads_the_attribute_only() {
        let mut element = Element::new("Подтвердить", &["button-confirm"]);
        assert_eq!(element.data_url(), None);
        element.set_attr("data-url", "/checkin/42/confirm");
        assert_eq!(element.data_url(), Some("/checkin/42/confirm"));
    }
}

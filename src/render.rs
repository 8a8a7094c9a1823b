use crate::config::{RenderMode, ACTED_CLASS};
use crate::page::Page;

/// Applies the acted treatment to the clicked button's slot. Only successful
/// clicks reach here; failures leave the page untouched.
pub fn apply_success(page: &mut Page, slot: usize, label: &str, mode: RenderMode) {
    match mode {
        RenderMode::MuteInPlace => {
            if let Some(element) = page.button_mut(slot) {
                element.text = label.to_string();
                element.set_style("color", "gray");
                element.set_style("border-color", "gray");
                element.classes = vec![ACTED_CLASS.to_string()];
            }
        }
        RenderMode::ReplaceContent => {
            page.replace_content(
                slot,
                format!("<span style=\"color: #007bff; font-weight: bold;\">{label}</span>"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn page_with_confirm_button() -> (Page, usize) {
        let mut page = Page::new();
        let mut element = Element::new("Подтвердить", &["button-confirm"]);
        element.set_attr("data-url", "/checkin/42/confirm");
        let slot = page.push_button(element);
        (page, slot)
    }

    #[test]
    fn mute_in_place_grays_out_and_swaps_class() {
        let (mut page, slot) = page_with_confirm_button();
        apply_success(&mut page, slot, "Подтверждено", RenderMode::MuteInPlace);

        let element = page.button(slot).unwrap();
        assert_eq!(element.text, "Подтверждено");
        assert_eq!(element.styles.get("color").unwrap(), "gray");
        assert_eq!(element.styles.get("border-color").unwrap(), "gray");
        assert_eq!(element.classes, vec![ACTED_CLASS.to_string()]);
    }

    #[test]
    fn replace_content_swaps_slot_for_styled_span() {
        let (mut page, slot) = page_with_confirm_button();
        apply_success(&mut page, slot, "Подтверждено", RenderMode::ReplaceContent);

        assert_eq!(page.button(slot), None);
        assert_eq!(
            page.replaced(slot),
            Some("<span style=\"color: #007bff; font-weight: bold;\">Подтверждено</span>")
        );
    }
}

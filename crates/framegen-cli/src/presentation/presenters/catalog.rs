use framegen_types::{ExampleCatalog, TypeCatalog};

use crate::presentation::view_models::{
    ExampleCardViewModel, ExampleListViewModel, ExampleModalViewModel, TypeCardViewModel,
    TypeListViewModel,
};

const DEFAULT_ICON: &str = "fas fa-cog";

/// Font Awesome class for a type card.
pub fn type_icon(key: &str) -> &'static str {
    match key {
        "linear" => "fas fa-arrow-right",
        "non_linear" => "fas fa-th",
        "cyclical" => "fas fa-sync-alt",
        "hierarchical" => "fas fa-layer-group",
        "matrix" => "fas fa-border-all",
        _ => DEFAULT_ICON,
    }
}

/// One card per catalog entry, in catalog order; at most one is selected.
pub fn present_type_list(types: &TypeCatalog, selected: Option<&str>) -> TypeListViewModel {
    let types = types
        .iter()
        .map(|(key, info)| TypeCardViewModel {
            key: key.to_string(),
            name: info.name.clone(),
            description: info.description.clone(),
            characteristics: info.characteristics.clone(),
            ideal_steps: info.ideal_steps.clone(),
            icon: type_icon(key).to_string(),
            selected: selected == Some(key),
        })
        .collect();

    TypeListViewModel { types }
}

pub fn present_example_list(examples: &ExampleCatalog) -> ExampleListViewModel {
    let examples = examples
        .iter()
        .map(|(key, example)| ExampleCardViewModel {
            key: key.to_string(),
            name: example.name.clone(),
            elements: example.elements.clone(),
        })
        .collect();

    ExampleListViewModel { examples }
}

/// `None` unless both catalogs know `key`.
pub fn present_example_modal(
    key: &str,
    examples: &ExampleCatalog,
    types: &TypeCatalog,
) -> Option<ExampleModalViewModel> {
    let example = examples.get(key)?;
    let info = types.get(key)?;

    Some(ExampleModalViewModel {
        key: key.to_string(),
        name: example.name.clone(),
        type_name: info.name.clone(),
        type_description: info.description.clone(),
        elements: example.elements.clone(),
        characteristics: info.characteristics.clone(),
        ideal_steps: info.ideal_steps.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPES: &str = r#"{
        "linear": {"name": "Linear", "description": "In order", "characteristics": ["Causality"], "ideal_steps": "3-8 steps"},
        "spiral": {"name": "Spiral", "description": "Outward", "characteristics": "Growth", "ideal_steps": "4 turns"}
    }"#;

    const EXAMPLES: &str = r#"{
        "linear": {"name": "Design Thinking", "elements": ["Empathise", "Define"]}
    }"#;

    fn types() -> TypeCatalog {
        serde_json::from_str(TYPES).unwrap()
    }

    fn examples() -> ExampleCatalog {
        serde_json::from_str(EXAMPLES).unwrap()
    }

    #[test]
    fn test_icon_table_with_fallback() {
        assert_eq!(type_icon("linear"), "fas fa-arrow-right");
        assert_eq!(type_icon("non_linear"), "fas fa-th");
        assert_eq!(type_icon("cyclical"), "fas fa-sync-alt");
        assert_eq!(type_icon("hierarchical"), "fas fa-layer-group");
        assert_eq!(type_icon("matrix"), "fas fa-border-all");
        assert_eq!(type_icon("spiral"), "fas fa-cog");
    }

    #[test]
    fn test_type_list_marks_only_selected_card() {
        let vm = present_type_list(&types(), Some("spiral"));

        let selected: Vec<_> = vm.types.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].key, "spiral");
        assert_eq!(selected[0].icon, "fas fa-cog");
        assert_eq!(selected[0].characteristics, vec!["Growth"]);
    }

    #[test]
    fn test_type_list_keeps_catalog_order() {
        let vm = present_type_list(&types(), None);
        let keys: Vec<_> = vm.types.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["linear", "spiral"]);
        assert!(vm.types.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_example_modal_needs_both_catalogs() {
        let modal = present_example_modal("linear", &examples(), &types()).unwrap();
        assert_eq!(modal.name, "Design Thinking");
        assert_eq!(modal.type_name, "Linear");
        assert_eq!(modal.ideal_steps, "3-8 steps");

        assert!(present_example_modal("spiral", &examples(), &types()).is_none());
        assert!(present_example_modal("matrix", &examples(), &types()).is_none());
    }
}

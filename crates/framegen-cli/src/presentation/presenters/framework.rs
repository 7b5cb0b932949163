use framegen_types::{FrameworkTypeInfo, GeneratedFramework};

use crate::presentation::view_models::{
    ElementViewModel, ExportedFileViewModel, FrameworkViewModel, GenerateResultViewModel,
};

pub fn present_framework(
    framework: &GeneratedFramework,
    type_info: &FrameworkTypeInfo,
) -> FrameworkViewModel {
    let elements = framework
        .elements
        .iter()
        .enumerate()
        .map(|(index, element)| ElementViewModel {
            number: index + 1,
            name: element.name.clone(),
            description: element.description.clone(),
            activities: element.activities.clone(),
            success_criteria: element.success_criteria.clone(),
        })
        .collect();

    FrameworkViewModel {
        name: framework.name.clone(),
        type_key: framework.framework_type.clone(),
        type_name: type_info.name.clone(),
        description: framework.description.clone(),
        elements,
        when_to_use: framework.when_to_use.clone(),
        best_practices: framework.best_practices.clone(),
        pitfalls: framework.pitfalls.clone(),
        psychology_principle: framework.psychology_principle.clone(),
        visual_concept: framework.visual_concept.clone(),
    }
}

pub fn present_generate_result(
    framework: FrameworkViewModel,
    exported: Vec<ExportedFileViewModel>,
) -> GenerateResultViewModel {
    GenerateResultViewModel {
        framework,
        exported,
    }
}

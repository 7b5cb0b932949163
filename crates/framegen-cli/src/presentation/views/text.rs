use std::fmt;

use crate::presentation::view_models::{
    ExampleListViewModel, ExampleModalViewModel, FrameworkViewModel, GenerateResultViewModel,
    PageViewModel, TypeListViewModel,
};
use framegen_engine::ToastLevel;

// --------------------------------------------------------
// Catalogs
// --------------------------------------------------------

pub struct TypeListView<'a> {
    data: &'a TypeListViewModel,
}

impl<'a> TypeListView<'a> {
    pub fn new(data: &'a TypeListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for TypeListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.types.is_empty() {
            return writeln!(f, "No framework types available.");
        }

        writeln!(f, "{:<3}{:<14} {:<14} {:<18} DESCRIPTION", "", "KEY", "NAME", "STRUCTURE")?;
        writeln!(f, "{}", "-".repeat(100))?;
        for card in &self.data.types {
            let marker = if card.selected { "*" } else { "" };
            writeln!(
                f,
                "{:<3}{:<14} {:<14} {:<18} {}",
                marker, card.key, card.name, card.ideal_steps, card.description
            )?;
            if !card.characteristics.is_empty() {
                writeln!(f, "{:<3}{:<14} {}", "", "", card.characteristics.join(" · "))?;
            }
        }
        Ok(())
    }
}

pub struct ExampleListView<'a> {
    data: &'a ExampleListViewModel,
}

impl<'a> ExampleListView<'a> {
    pub fn new(data: &'a ExampleListViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ExampleListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.examples.is_empty() {
            return writeln!(f, "No examples available.");
        }

        for example in &self.data.examples {
            writeln!(f, "{:<14} {}", example.key, example.name)?;
            writeln!(f, "{:<14} {}", "", example.elements.join(" → "))?;
        }
        Ok(())
    }
}

pub struct ExampleModalView<'a> {
    data: &'a ExampleModalViewModel,
}

impl<'a> ExampleModalView<'a> {
    pub fn new(data: &'a ExampleModalViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ExampleModalView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = self.data;
        writeln!(f, "{}", m.name)?;
        writeln!(f, "[{} Framework]", m.type_name)?;
        writeln!(f, "{}", m.type_description)?;
        writeln!(f)?;
        writeln!(f, "Framework Elements:")?;
        for (index, element) in m.elements.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, element)?;
        }
        writeln!(f)?;
        writeln!(f, "Characteristics:")?;
        for characteristic in &m.characteristics {
            writeln!(f, "  • {}", characteristic)?;
        }
        writeln!(f)?;
        writeln!(f, "Ideal Structure: {}", m.ideal_steps)
    }
}

// --------------------------------------------------------
// Generated framework
// --------------------------------------------------------

pub struct FrameworkView<'a> {
    data: &'a FrameworkViewModel,
}

impl<'a> FrameworkView<'a> {
    pub fn new(data: &'a FrameworkViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for FrameworkView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fw = self.data;
        writeln!(f, "{}", fw.name)?;
        writeln!(f, "[{} Framework]", fw.type_name)?;
        if !fw.description.is_empty() {
            writeln!(f, "{}", fw.description)?;
        }

        for element in &fw.elements {
            writeln!(f)?;
            writeln!(f, "{}. {}", element.number, element.name)?;
            writeln!(f, "   {}", element.description)?;
            for activity in &element.activities {
                writeln!(f, "   • {}", activity)?;
            }
            writeln!(f, "   Success: {}", element.success_criteria)?;
        }

        writeln!(f)?;
        writeln!(f, "When to Use:     {}", fw.when_to_use)?;
        writeln!(f, "Best Practices:")?;
        for practice in &fw.best_practices {
            writeln!(f, "  • {}", practice)?;
        }
        writeln!(f, "Common Pitfalls:")?;
        for pitfall in &fw.pitfalls {
            writeln!(f, "  • {}", pitfall)?;
        }
        writeln!(f, "Psychology:      {}", fw.psychology_principle)?;
        writeln!(f, "Visual Concept:  {}", fw.visual_concept)
    }
}

pub struct GenerateResultView<'a> {
    data: &'a GenerateResultViewModel,
}

impl<'a> GenerateResultView<'a> {
    pub fn new(data: &'a GenerateResultViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for GenerateResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", FrameworkView::new(&self.data.framework))?;

        if !self.data.exported.is_empty() {
            writeln!(f)?;
            writeln!(f, "Exported:")?;
            for file in &self.data.exported {
                writeln!(f, "  {} ({} bytes)", file.path, file.bytes)?;
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Page summary
// --------------------------------------------------------

pub struct PageView<'a> {
    data: &'a PageViewModel,
}

impl<'a> PageView<'a> {
    pub fn new(data: &'a PageViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let page = self.data;
        writeln!(
            f,
            "Selected: {}",
            page.selected_type.as_deref().unwrap_or("(none)")
        )?;

        if page.results_visible
            && let Some(framework) = &page.framework
        {
            writeln!(f)?;
            write!(f, "{}", FrameworkView::new(framework))?;
        }

        if let Some(modal) = &page.modal {
            writeln!(f)?;
            write!(f, "{}", ExampleModalView::new(modal))?;
        }

        for toast in &page.toasts {
            let label = match toast.level {
                ToastLevel::Error => "error",
                ToastLevel::Success => "ok",
            };
            writeln!(f, "[{}] {}", label, toast.message)?;
        }
        Ok(())
    }
}

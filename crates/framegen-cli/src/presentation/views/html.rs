//! Page markup, class for class what the browser page renders.
//!
//! Every interpolated string goes through `escape`.

use std::fmt;

use crate::presentation::formatters::{escape, list_items};
use crate::presentation::view_models::{
    ExampleCardViewModel, ExampleModalViewModel, FrameworkViewModel, PageViewModel,
    ToastViewModel, TypeCardViewModel,
};
use framegen_engine::ToastLevel;

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

// --------------------------------------------------------
// Type cards
// --------------------------------------------------------

pub struct TypeCardsHtml<'a> {
    cards: &'a [TypeCardViewModel],
}

impl<'a> TypeCardsHtml<'a> {
    pub fn new(cards: &'a [TypeCardViewModel]) -> Self {
        Self { cards }
    }
}

impl fmt::Display for TypeCardsHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in self.cards {
            let class = if card.selected {
                "framework-type-card selected"
            } else {
                "framework-type-card"
            };
            writeln!(f, r#"<div class="{}" data-type="{}">"#, class, escape(&card.key))?;
            writeln!(f, r#"    <i class="card-icon {}"></i>"#, card.icon)?;
            writeln!(f, r#"    <h3 class="card-title">{}</h3>"#, escape(&card.name))?;
            writeln!(
                f,
                r#"    <p class="card-description">{}</p>"#,
                escape(&card.description)
            )?;
            writeln!(
                f,
                r#"    <ul class="card-characteristics">{}</ul>"#,
                list_items(&card.characteristics)
            )?;
            writeln!(
                f,
                r#"    <div style="margin-top: 1rem;"><small><strong>{}</strong></small></div>"#,
                escape(&card.ideal_steps)
            )?;
            writeln!(f, "</div>")?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Example gallery and dialog
// --------------------------------------------------------

pub struct ExampleCardsHtml<'a> {
    cards: &'a [ExampleCardViewModel],
}

impl<'a> ExampleCardsHtml<'a> {
    pub fn new(cards: &'a [ExampleCardViewModel]) -> Self {
        Self { cards }
    }
}

impl fmt::Display for ExampleCardsHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in self.cards {
            writeln!(f, r#"<div class="example-card" data-type="{}">"#, escape(&card.key))?;
            writeln!(f, r#"    <h3 class="example-title">{}</h3>"#, escape(&card.name))?;
            write!(f, r#"    <div class="example-elements">"#)?;
            for element in &card.elements {
                write!(f, r#"<span class="example-element">{}</span>"#, escape(element))?;
            }
            writeln!(f, "</div>")?;
            writeln!(f, "</div>")?;
        }
        Ok(())
    }
}

/// Body of the example dialog.
pub struct ExampleModalHtml<'a> {
    data: &'a ExampleModalViewModel,
}

impl<'a> ExampleModalHtml<'a> {
    pub fn new(data: &'a ExampleModalViewModel) -> Self {
        Self { data }
    }
}

impl fmt::Display for ExampleModalHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let m = self.data;
        writeln!(f, "<h2>{}</h2>", escape(&m.name))?;
        writeln!(f, r#"<div style="margin-bottom: 2rem;">"#)?;
        writeln!(
            f,
            r#"    <span class="framework-type-badge">{} Framework</span>"#,
            escape(&m.type_name)
        )?;
        writeln!(
            f,
            r#"    <p style="margin-top: 1rem;">{}</p>"#,
            escape(&m.type_description)
        )?;
        writeln!(f, "</div>")?;

        writeln!(f, "<h3>Framework Elements:</h3>")?;
        writeln!(f, r#"<div style="display: grid; gap: 1rem; margin-top: 1rem;">"#)?;
        for (index, element) in m.elements.iter().enumerate() {
            writeln!(
                f,
                r#"    <div class="example-step"><strong>{}. {}</strong></div>"#,
                index + 1,
                escape(element)
            )?;
        }
        writeln!(f, "</div>")?;

        writeln!(f, r#"<div style="margin-top: 2rem;">"#)?;
        writeln!(f, "    <h4>Characteristics:</h4>")?;
        writeln!(
            f,
            r#"    <ul style="margin-top: 0.5rem;">{}</ul>"#,
            list_items(&m.characteristics)
        )?;
        writeln!(f, "</div>")?;
        writeln!(
            f,
            r#"<div style="margin-top: 1rem;"><strong>Ideal Structure:</strong> {}</div>"#,
            escape(&m.ideal_steps)
        )
    }
}

// --------------------------------------------------------
// Generated framework
// --------------------------------------------------------

pub struct FrameworkHtml<'a> {
    data: &'a FrameworkViewModel,
}

impl<'a> FrameworkHtml<'a> {
    pub fn new(data: &'a FrameworkViewModel) -> Self {
        Self { data }
    }

    fn write_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fw = self.data;
        writeln!(f, r#"<div class="framework-header">"#)?;
        writeln!(f, r#"    <h1 class="framework-title">{}</h1>"#, escape(&fw.name))?;
        writeln!(
            f,
            r#"    <span class="framework-type-badge">{} Framework</span>"#,
            escape(&fw.type_name)
        )?;
        writeln!(
            f,
            r#"    <p class="framework-description">{}</p>"#,
            escape(&fw.description)
        )?;
        writeln!(f, "</div>")
    }

    fn write_elements(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, r#"<div class="framework-elements">"#)?;
        for element in &self.data.elements {
            writeln!(f, r#"    <div class="element-card">"#)?;
            writeln!(f, r#"        <div class="element-number">{}</div>"#, element.number)?;
            writeln!(f, r#"        <h3 class="element-name">{}</h3>"#, escape(&element.name))?;
            writeln!(
                f,
                r#"        <p class="element-description">{}</p>"#,
                escape(&element.description)
            )?;
            writeln!(f, r#"        <div class="element-activities">"#)?;
            writeln!(f, r#"            <h4><i class="fas fa-tasks"></i> Key Activities</h4>"#)?;
            writeln!(f, "            <ul>{}</ul>", list_items(&element.activities))?;
            writeln!(f, "        </div>")?;
            writeln!(f, r#"        <div class="element-success">"#)?;
            writeln!(f, r#"            <h4><i class="fas fa-trophy"></i> Success Criteria</h4>"#)?;
            writeln!(f, "            <p>{}</p>", escape(&element.success_criteria))?;
            writeln!(f, "        </div>")?;
            writeln!(f, "    </div>")?;
        }
        writeln!(f, "</div>")
    }

    fn write_meta(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fw = self.data;
        writeln!(f, r#"<div class="framework-meta">"#)?;
        meta_text(f, "fas fa-lightbulb", "When to Use", &fw.when_to_use)?;
        meta_list(f, "fas fa-check-circle", "Best Practices", &fw.best_practices)?;
        meta_list(f, "fas fa-exclamation-triangle", "Common Pitfalls", &fw.pitfalls)?;
        meta_text(f, "fas fa-brain", "Psychology", &fw.psychology_principle)?;
        meta_text(f, "fas fa-eye", "Visual Concept", &fw.visual_concept)?;
        writeln!(f, "</div>")
    }
}

fn meta_text(f: &mut fmt::Formatter, icon: &str, title: &str, body: &str) -> fmt::Result {
    writeln!(f, r#"    <div class="meta-card">"#)?;
    writeln!(f, r#"        <h3><i class="{}"></i> {}</h3>"#, icon, title)?;
    writeln!(f, "        <p>{}</p>", escape(body))?;
    writeln!(f, "    </div>")
}

fn meta_list(f: &mut fmt::Formatter, icon: &str, title: &str, items: &[String]) -> fmt::Result {
    writeln!(f, r#"    <div class="meta-card">"#)?;
    writeln!(f, r#"        <h3><i class="{}"></i> {}</h3>"#, icon, title)?;
    writeln!(f, "        <ul>{}</ul>", list_items(items))?;
    writeln!(f, "    </div>")
}

impl fmt::Display for FrameworkHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_header(f)?;
        self.write_elements(f)?;
        self.write_meta(f)
    }
}

// --------------------------------------------------------
// Toasts
// --------------------------------------------------------

pub struct ToastsHtml<'a> {
    toasts: &'a [ToastViewModel],
}

impl<'a> ToastsHtml<'a> {
    pub fn new(toasts: &'a [ToastViewModel]) -> Self {
        Self { toasts }
    }
}

impl fmt::Display for ToastsHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for toast in self.toasts {
            let (open, icon) = match toast.level {
                ToastLevel::Error => (
                    r#"<div id="errorToast" class="toast toast-error">"#,
                    "fas fa-exclamation-triangle",
                ),
                ToastLevel::Success => (
                    r#"<div class="toast toast-success">"#,
                    "fas fa-check-circle",
                ),
            };
            writeln!(f, "{}", open)?;
            writeln!(
                f,
                r#"    <i class="{}"></i> <span>{}</span>"#,
                icon,
                escape(&toast.message)
            )?;
            writeln!(f, "</div>")?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Whole page
// --------------------------------------------------------

pub struct PageHtml<'a> {
    data: &'a PageViewModel,
}

impl<'a> PageHtml<'a> {
    pub fn new(data: &'a PageViewModel) -> Self {
        Self { data }
    }

    fn write_form(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let page = self.data;
        writeln!(
            f,
            r#"<section id="inputForm" style="display: {};">"#,
            display(page.form_visible)
        )?;
        writeln!(f, r#"<form id="frameworkForm">"#)?;
        if let Some(selected) = &page.selected_type {
            writeln!(
                f,
                r#"    <input type="hidden" name="type" value="{}">"#,
                escape(selected)
            )?;
        }
        writeln!(f, r#"    <input name="industry" placeholder="Industry" required>"#)?;
        writeln!(f, r#"    <input name="purpose" placeholder="Purpose" required>"#)?;
        writeln!(
            f,
            r#"    <input name="targetAudience" placeholder="Target audience" required>"#
        )?;
        writeln!(f, r#"    <select name="complexity">"#)?;
        writeln!(f, r#"        <option value="low">Low</option>"#)?;
        writeln!(f, r#"        <option value="medium" selected>Medium</option>"#)?;
        writeln!(f, r#"        <option value="high">High</option>"#)?;
        writeln!(f, "    </select>")?;
        writeln!(f, r#"    <button type="submit">Generate Framework</button>"#)?;
        writeln!(f, "</form>")?;
        writeln!(f, "</section>")
    }

    fn write_results(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let page = self.data;
        writeln!(
            f,
            r#"<section id="loadingState" style="display: {};">Generating your framework...</section>"#,
            display(page.loading_visible)
        )?;
        writeln!(
            f,
            r#"<section id="results" style="display: {};">"#,
            display(page.results_visible)
        )?;
        writeln!(f, r#"<div id="frameworkOutput">"#)?;
        if let Some(framework) = &page.framework {
            write!(f, "{}", FrameworkHtml::new(framework))?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, r#"<button id="regenerateBtn">Regenerate</button>"#)?;
        writeln!(f, r#"<button id="exportBtn">Export</button>"#)?;
        writeln!(f, "</section>")
    }

    fn write_modal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let modal = self.data.modal.as_ref();
        writeln!(
            f,
            r#"<div id="frameworkModal" class="modal" style="display: {};">"#,
            display(modal.is_some())
        )?;
        writeln!(f, r#"<div class="modal-content">"#)?;
        writeln!(f, r#"<span class="close" id="closeModal">&times;</span>"#)?;
        writeln!(f, r#"<div id="modalBody">"#)?;
        if let Some(modal) = modal {
            write!(f, "{}", ExampleModalHtml::new(modal))?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")
    }
}

impl fmt::Display for PageHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let page = self.data;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, r#"<html lang="en">"#)?;
        writeln!(f, "<head>")?;
        writeln!(f, r#"<meta charset="UTF-8">"#)?;
        writeln!(f, "<title>AI System Generator</title>")?;
        writeln!(
            f,
            r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css">"#
        )?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, r#"<div class="container">"#)?;

        writeln!(f, r#"<section id="frameworkTypes" class="framework-types">"#)?;
        write!(f, "{}", TypeCardsHtml::new(&page.types.types))?;
        writeln!(f, "</section>")?;

        self.write_form(f)?;
        self.write_results(f)?;

        writeln!(f, r#"<section id="examplesGrid" class="examples-grid">"#)?;
        write!(f, "{}", ExampleCardsHtml::new(&page.examples.examples))?;
        writeln!(f, "</section>")?;
        writeln!(f, "</div>")?;

        self.write_modal(f)?;
        write!(f, "{}", ToastsHtml::new(&page.toasts))?;

        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

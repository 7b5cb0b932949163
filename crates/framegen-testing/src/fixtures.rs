//! Reference payloads, shaped exactly like the generation backend's responses.

use framegen_types::{ExampleCatalog, GeneratedFramework, TypeCatalog};

pub const FRAMEWORK_TYPES_JSON: &str = r#"{
  "linear": {
    "name": "Linear",
    "description": "A finite, one-way sequence of steps that must be completed in order",
    "characteristics": ["Causality", "Irreversibility", "Completion Trigger"],
    "ideal_steps": "3-8 steps",
    "examples": ["Design Thinking", "Sales Pipeline", "Product Launch"]
  },
  "non_linear": {
    "name": "Non-Linear",
    "description": "Independent elements that can be used in any order or combination",
    "characteristics": ["Order-agnostic", "Equal weight", "Re-mixability"],
    "ideal_steps": "4-9 pillars",
    "examples": ["7 Habits", "McKinsey 7-S", "Marketing 4 Ps"]
  },
  "cyclical": {
    "name": "Cyclical",
    "description": "A closed loop where the output feeds back into the first stage",
    "characteristics": ["Recurrence", "Feedback", "Momentum over Completion"],
    "ideal_steps": "3-6 segments",
    "examples": ["PDCA Cycle", "Habit Loop", "Agile Sprint"]
  },
  "hierarchical": {
    "name": "Hierarchical",
    "description": "Stacked levels where higher tiers include or supersede lower ones",
    "characteristics": ["Containment", "Priority/Status", "Directional Advancement"],
    "ideal_steps": "3-7 tiers",
    "examples": ["Maslow's Hierarchy", "Bloom's Taxonomy", "Skill Levels"]
  },
  "matrix": {
    "name": "Matrix",
    "description": "Two or more axes mapping ideas for diagnosis and prioritization",
    "characteristics": ["Orthogonal Axes", "Quadrants/Zones", "Placement over Progression"],
    "ideal_steps": "2x2 to 5x5 grid",
    "examples": ["Eisenhower Matrix", "BCG Matrix", "SWOT Analysis"]
  }
}"#;

pub const EXAMPLES_JSON: &str = r#"{
  "linear": {
    "name": "Design Thinking 5-Step Process",
    "elements": ["Empathise", "Define", "Ideate", "Prototype", "Test"]
  },
  "non_linear": {
    "name": "Marketing 4 Ps",
    "elements": ["Product", "Price", "Place", "Promotion"]
  },
  "cyclical": {
    "name": "PDCA Improvement Cycle",
    "elements": ["Plan", "Do", "Check", "Act"]
  },
  "hierarchical": {
    "name": "Maslow's Hierarchy of Needs",
    "elements": ["Physiological", "Safety", "Love/Belonging", "Esteem", "Self-Actualization"]
  },
  "matrix": {
    "name": "Eisenhower Matrix",
    "elements": ["Do First", "Schedule", "Delegate", "Delete"]
  }
}"#;

/// A cyclical framework whose list fields arrive in mixed shapes:
/// `best_practices` and the first element's `activities` are bare strings.
pub const GROWTH_FRAMEWORK_JSON: &str = r#"{
  "name": "Growth & Retention!",
  "type": "cyclical",
  "description": "A loop that turns new customers into repeat customers",
  "elements": [
    {
      "name": "Attract",
      "description": "Bring qualified visitors in.",
      "activities": "Publish weekly content",
      "success_criteria": "Steady inbound traffic"
    },
    {
      "name": "Convert",
      "description": "Turn visitors into customers.",
      "activities": ["Simplify checkout", "Offer a trial"],
      "success_criteria": "Conversion above 3%"
    },
    {
      "name": "Retain",
      "description": "Keep customers coming back.",
      "activities": ["Onboarding emails", "Loyalty rewards"],
      "success_criteria": "Churn below 2% monthly"
    }
  ],
  "when_to_use": "When growth has stalled after launch",
  "best_practices": "Measure every stage of the loop",
  "pitfalls": ["Optimizing one stage in isolation", "Ignoring churn"],
  "psychology_principle": "Habit formation through repeated reward",
  "visual_concept": "Circular flywheel"
}"#;

/// A linear framework with every list field already in sequence form.
pub const LAUNCH_FRAMEWORK_JSON: &str = r#"{
  "name": "Launch Ladder",
  "type": "linear",
  "description": "Five steps from idea to launch",
  "elements": [
    {
      "name": "Validate",
      "description": "Confirm the problem exists.",
      "activities": ["Interview ten customers"],
      "success_criteria": "Three paying pilots"
    }
  ],
  "when_to_use": "Before committing engineering time",
  "best_practices": ["Talk to users weekly", "Ship small"],
  "pitfalls": ["Building before validating"],
  "psychology_principle": "Commitment and consistency",
  "visual_concept": "Ascending staircase"
}"#;

pub fn type_catalog() -> TypeCatalog {
    serde_json::from_str(FRAMEWORK_TYPES_JSON).expect("reference type catalog must parse")
}

pub fn example_catalog() -> ExampleCatalog {
    serde_json::from_str(EXAMPLES_JSON).expect("reference example catalog must parse")
}

pub fn growth_framework() -> GeneratedFramework {
    GeneratedFramework::from_json(GROWTH_FRAMEWORK_JSON).expect("growth fixture must parse")
}

pub fn launch_framework() -> GeneratedFramework {
    GeneratedFramework::from_json(LAUNCH_FRAMEWORK_JSON).expect("launch fixture must parse")
}

/// The growth fixture with every string-vs-list field rewritten to its list form.
pub fn growth_framework_listified_json() -> String {
    let mut value: serde_json::Value =
        serde_json::from_str(GROWTH_FRAMEWORK_JSON).expect("growth fixture must parse");
    value["best_practices"] = serde_json::json!(["Measure every stage of the loop"]);
    value["elements"][0]["activities"] = serde_json::json!(["Publish weekly content"]);
    value.to_string()
}

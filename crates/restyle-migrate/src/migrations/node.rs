//! Node component rules - preview-only.
//!
//! `Node.tsx` is the draggable node card. Rule 1 follows the canvas
//! migration's `id="canvas-area"` and switches the drag handler's DOM
//! lookup from a class selector to `getElementById`.
//!
//! Rules 2 and 3 both restyle the same wrapper element: rule 2 rewrites
//! the `node-container` class expression, rule 3 rewrites the positional
//! style block into a reduced style plus a second class expression.
//! Applied together they emit a duplicated `className` attribute, so this
//! migration is not persisted: the pipeline computes and reports the
//! rewrite but leaves `Node.tsx` untouched on disk. Flip [`PERSIST`] once
//! one of the two rules is dropped.

use restyle_edit::{EditError, Rule};

/// Target path, relative to the project root.
pub const TARGET: &str = "src/components/Node.tsx";

/// Whether the pipeline writes this migration's result back.
pub const PERSIST: bool = false;

const DOM_LOOKUP_FROM: &str = ".querySelector(\".canvas-area\")";

const DOM_LOOKUP_TO: &str = ".getElementById(\"canvas-area\")";

const CONTAINER_FROM: &str = "className={`node-container ${isSelected ? \"selected\" : \"\"} ${isStart ? \"start-node\" : \"\"} animate-slide-in`}";

/// Card chrome with selected, start-node, and stacking variants.
const CONTAINER_TO: &str = "className={`absolute bg-white dark:bg-stone-900 border rounded-xl p-4 min-w-[220px] shadow-[0_4px_6px_-1px_rgba(0,0,0,0.1),0_2px_4px_-2px_rgba(0,0,0,0.1)] dark:shadow-[0_10px_15px_-3px_rgba(0,0,0,0.5),0_4px_6px_-4px_rgba(0,0,0,0.5)] cursor-grab select-none transition-shadow duration-200 active:cursor-grabbing ${isSelected ? \"border-[#7ed6df] shadow-[0_0_0_3px_rgba(126,214,223,0.3)]\" : \"border-slate-300 dark:border-stone-700\"} ${isStart ? \"border-l-4 border-l-[#7ed6df]\" : \"\"} ${isSelected ? \"z-10\" : \"z-0\"}`}";

/// Positional style block carrying pointer-events and stacking inline.
const POSITION_STYLE_PATTERN: &str = r#"style=\{\{\n\s*left: node\.position\.x,\n\s*top: node\.position\.y,\n\s*pointerEvents: "auto", // Important so children events pass up\n\s*zIndex: isSelected \? 10 : 2,\n\s*\}\}"#;

/// Reduced style plus the class expression that absorbs the static parts.
const POSITION_STYLE_REPLACEMENT: &str = "style={{ left: node.position.x, top: node.position.y }}\n      className={`absolute pointer-events-auto bg-white dark:bg-stone-900 border rounded-xl p-4 min-w-[220px] cursor-grab select-none transition-shadow duration-200 active:cursor-grabbing ${isSelected ? \"border-[#7ed6df] shadow-[0_0_0_3px_rgba(126,214,223,0.3)] z-10\" : \"border-slate-300 dark:border-stone-700 shadow-sm z-[2]\"} ${isStart ? \"!border-l-4 !border-l-[#7ed6df]\" : \"\"}`}";

/// Ordered rule list for the node component.
///
/// # Errors
/// Returns `EditError::Pattern` if a pattern rule fails to compile.
pub fn rules() -> Result<Vec<Rule>, EditError> {
    Ok(vec![
        Rule::literal("dom-lookup", DOM_LOOKUP_FROM, DOM_LOOKUP_TO),
        Rule::literal("container-classes", CONTAINER_FROM, CONTAINER_TO),
        Rule::pattern(
            "position-style",
            POSITION_STYLE_PATTERN,
            POSITION_STYLE_REPLACEMENT,
        )?,
    ])
}

//! Edge component rules.
//!
//! `Edge.tsx` renders a connector: an invisible wide hit-area path, the
//! visible bezier path with a selected state, and a label card positioned
//! via `foreignObject`. Rules 5 and 6 strip the label's inline style in
//! two bites; rule 7 is the cleanup net for an empty `style={{ }}` shell
//! those deletions can leave behind when the block's exact text differs.

use restyle_edit::{EditError, Rule};

/// Target path, relative to the project root.
pub const TARGET: &str = "src/components/Edge.tsx";

const HIT_AREA_REPLACEMENT: &str = "className=\"fill-none stroke-transparent stroke-[20px] pointer-events-auto cursor-pointer\"";

const PATH_SELECTED_FROM: &str =
    "className={`connection-path ${isSelected ? \"selected\" : \"\"}`}";

const PATH_SELECTED_TO: &str = "className={`fill-none pointer-events-auto cursor-pointer transition-all duration-200 ${isSelected ? \"stroke-[#7ed6df] stroke-[3px]\" : \"stroke-slate-400 dark:stroke-stone-600 stroke-2\"}`}";

const FOREIGN_OBJECT_FROM: &str = "style={{ pointerEvents: \"none\", overflow: \"visible\" }}";

const FOREIGN_OBJECT_TO: &str = "className=\"pointer-events-none overflow-visible\"";

const LABEL_FROM: &str = "className={`edge-label ${isSelected ? \"selected\" : \"\"}`}";

/// Label card chrome, light and dark, with the selected-state override.
const LABEL_TO: &str = "className={`absolute top-[20px] left-[100px] bg-white dark:bg-stone-900 border px-2 py-1 rounded-xl text-xs font-medium text-slate-500 dark:text-slate-400 pointer-events-auto cursor-pointer -translate-x-1/2 -translate-y-1/2 z-10 shadow-sm transition-all duration-200 whitespace-nowrap ${isSelected ? \"!border-[#7ed6df] !text-slate-900 dark:!text-slate-50 z-20\" : \"border-slate-200 dark:border-stone-800\"}`}";

/// Covered by rule 1's pointer-events-auto.
const LABEL_POINTER_EVENTS: &str = ",\n            pointerEvents: \"auto\",";

/// The fixed-offset block rule 5 leaves behind.
const LABEL_OFFSET_STYLE: &str = "style={{\n            position: \"absolute\",\n            top: \"20px\",\n            left: \"100px\"\n          }}";

const EMPTY_STYLE_PATTERN: &str = r"\n\s*style=\{\{\s*\}\}";

/// Ordered rule list for the edge component. Order matters: rule 7 only
/// fires on what rules 5 and 6 leave behind.
///
/// # Errors
/// Returns `EditError::Pattern` if a pattern rule fails to compile.
pub fn rules() -> Result<Vec<Rule>, EditError> {
    Ok(vec![
        Rule::literal(
            "hit-area-classes",
            "className=\"connection-path-bg\"",
            HIT_AREA_REPLACEMENT,
        ),
        Rule::literal("path-selected-classes", PATH_SELECTED_FROM, PATH_SELECTED_TO),
        Rule::literal(
            "foreign-object-classes",
            FOREIGN_OBJECT_FROM,
            FOREIGN_OBJECT_TO,
        ),
        Rule::literal("label-classes", LABEL_FROM, LABEL_TO),
        Rule::delete_literal("label-pointer-events", LABEL_POINTER_EVENTS),
        Rule::delete_literal("label-offset-style", LABEL_OFFSET_STYLE),
        Rule::delete_pattern("empty-style-cleanup", EMPTY_STYLE_PATTERN)?,
    ])
}

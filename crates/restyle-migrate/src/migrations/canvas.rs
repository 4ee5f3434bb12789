//! Canvas component rules.
//!
//! `Canvas.tsx` owns the pannable viewport: the dashed preview path drawn
//! while connecting nodes, the background dot pattern, the transformed
//! content layer, and the SVG overlay that hosts the edges. Rule 2 also
//! introduces the `canvas-area` element id that the node component's DOM
//! lookup switches to (see [`super::node`]).

use restyle_edit::{EditError, Rule};

/// Target path, relative to the project root.
pub const TARGET: &str = "src/components/Canvas.tsx";

/// Dashed connection preview: class token plus inline stroke style.
const DRAWING_PATH_PATTERN: &str = r#"className="connection-path"\n\s*d=\{pathData\}\n\s*strokeDasharray="5,5"\n\s*style=\{\{ pointerEvents: "none", stroke: "var\(--accent-color\)" \}\}"#;

const DRAWING_PATH_REPLACEMENT: &str = "className=\"fill-none stroke-2 stroke-[#7ed6df] pointer-events-none\"\n        d={pathData}\n        strokeDasharray=\"5,5\"";

const CANVAS_AREA_REPLACEMENT: &str = "id=\"canvas-area\" className=\"flex-1 relative overflow-hidden bg-slate-50 dark:bg-stone-950\"";

const BG_PATTERN_REPLACEMENT: &str = "className=\"absolute inset-0 pointer-events-none bg-[radial-gradient(#e2e8f0_1px,transparent_1px)] dark:bg-[radial-gradient(#292524_1px,transparent_1px)] delay-0\"";

/// Content layer: translate+scale transform with static positioning mixed
/// into the same inline style block.
const VIEWPORT_STYLE_PATTERN: &str = r#"style=\{\{\s*transform: `translate\(\$\{state\.transform\.x\}px, \$\{state\.transform\.y\}px\) scale\(\$\{state\.transform\.zoom\}\)`,\s*transformOrigin: "0 0",\s*position: "absolute",\s*inset: 0,\s*pointerEvents:\s*"none" /\* Parent catches events, nodes catch their own \*/,\s*\}\}"#;

/// Only the dynamic transform template survives as inline style.
const VIEWPORT_REPLACEMENT: &str = "className=\"absolute inset-0 origin-top-left pointer-events-none\"\n        style={{ transform: `translate(${state.transform.x}px, ${state.transform.y}px) scale(${state.transform.zoom})` }}";

const SVG_OVERLAY_REPLACEMENT: &str = "className=\"absolute inset-0 w-full h-full pointer-events-none z-0\"";

/// Ordered rule list for the canvas component.
///
/// # Errors
/// Returns `EditError::Pattern` if a pattern rule fails to compile.
pub fn rules() -> Result<Vec<Rule>, EditError> {
    Ok(vec![
        Rule::pattern(
            "drawing-path-style",
            DRAWING_PATH_PATTERN,
            DRAWING_PATH_REPLACEMENT,
        )?,
        Rule::literal(
            "canvas-area-classes",
            "className=\"canvas-area\"",
            CANVAS_AREA_REPLACEMENT,
        ),
        Rule::literal(
            "bg-pattern-classes",
            "className=\"canvas-bg-pattern\"",
            BG_PATTERN_REPLACEMENT,
        ),
        Rule::pattern(
            "viewport-transform-style",
            VIEWPORT_STYLE_PATTERN,
            VIEWPORT_REPLACEMENT,
        )?,
        Rule::literal(
            "svg-overlay-classes",
            "className=\"canvas-svg\"",
            SVG_OVERLAY_REPLACEMENT,
        ),
    ])
}

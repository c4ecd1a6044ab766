use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_STYLE: &str = "photo";

/// Style conditioning text appended to the prompt-expansion instruction.
/// Built once at startup and never mutated.
static STYLE_PROMPTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut styles = HashMap::new();
    styles.insert(
        "photo",
        "Editorial photography style, natural lighting, shallow depth of field, magazine quality, atmospheric and evocative, 4K, high resolution, professional photograph",
    );
    styles.insert(
        "illustration",
        "Hand-painted gouache illustration with visible brushstrokes, soft painterly style inspired by Studio Ghibli, warm atmospheric lighting, dreamy and whimsical, artistic illustration",
    );
    styles.insert(
        "3d",
        "Cinema 4D style 3D render, soft lighting, pastel colors, abstract geometric shapes, clean minimalist composition, octane render quality, isometric 3D art",
    );
    styles.insert(
        "minimal",
        "Minimalist graphic design, solid color blocks, simple geometric shapes, clean composition, Bauhaus inspired, modern flat design aesthetic",
    );
    styles
});

/// Looks up the descriptor for a style id. Unknown ids fall back to the
/// default photo descriptor, so this never fails.
pub fn resolve_style(style_id: &str) -> &'static str {
    STYLE_PROMPTS
        .get(style_id)
        .copied()
        .unwrap_or_else(|| STYLE_PROMPTS[DEFAULT_STYLE])
}

pub fn known_styles() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = STYLE_PROMPTS.keys().copied().collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_styles_resolve_to_their_descriptor() {
        assert!(resolve_style("illustration").contains("gouache"));
        assert!(resolve_style("3d").contains("Cinema 4D"));
        assert!(resolve_style("minimal").contains("Bauhaus"));
    }

    #[test]
    fn unknown_styles_fall_back_to_photo() {
        let fallback = resolve_style("does-not-exist");
        assert_eq!(fallback, resolve_style(DEFAULT_STYLE));
        assert!(fallback.contains("Editorial photography"));
    }

    #[test]
    fn lookup_is_idempotent() {
        assert_eq!(resolve_style("photo"), resolve_style("photo"));
        assert_eq!(resolve_style(""), resolve_style("unmapped"));
    }

    #[test]
    fn catalog_lists_all_styles() {
        assert_eq!(known_styles(), vec!["3d", "illustration", "minimal", "photo"]);
    }
}

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationKey {
    Normal,
    Kaioken,
    Kaioken10,
    Ssj,
    Ssj2,
    Ssj3,
    Ssj4,
    God,
    Blue,
    BlueKaioken,
    Ui,
    Mui,
}

/// One rung of the unlock ladder, gated by lifetime KI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transformation {
    pub key: TransformationKey,
    pub name: String,
    pub min_ki: u32,
    pub glyph: String,
}

fn tier(key: TransformationKey, name: &str, min_ki: u32, glyph: &str) -> Transformation {
    Transformation {
        key,
        name: name.to_string(),
        min_ki,
        glyph: glyph.to_string(),
    }
}

/// The full ladder, ascending by `min_ki`. The first entry sits at 0 so
/// every KI total resolves to a transformation.
pub static TRANSFORMATIONS: Lazy<Vec<Transformation>> = Lazy::new(|| {
    vec![
        tier(TransformationKey::Normal, "Normal", 0, "🙂"),
        tier(TransformationKey::Kaioken, "Kaioken", 100, "🔥"),
        tier(TransformationKey::Kaioken10, "Kaioken x10", 300, "🔥🔥"),
        tier(TransformationKey::Ssj, "Super Saiyan", 600, "💛"),
        tier(TransformationKey::Ssj2, "Super Saiyan 2", 1000, "⚡"),
        tier(TransformationKey::Ssj3, "Super Saiyan 3", 1500, "🔥"),
        tier(TransformationKey::Ssj4, "Super Saiyan 4", 2200, "🦍"),
        tier(TransformationKey::God, "Super Saiyan God", 3000, "🔴"),
        tier(TransformationKey::Blue, "Super Saiyan Blue", 4000, "🔵"),
        tier(TransformationKey::BlueKaioken, "Blue + Kaioken", 5500, "🔵🔥"),
        tier(TransformationKey::Ui, "Ultra Instinct", 7000, "⚪"),
        tier(TransformationKey::Mui, "Mastered Ultra Instinct", 9000, "⚪✨"),
    ]
});

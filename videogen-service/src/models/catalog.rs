//! Static catalog of generation models, prompt tags and example prompts
//! served to the browser UI.

use serde::ser::{Serialize, Serializer};

/// Insertion-ordered, compile-time map serialized as a JSON object.
#[derive(Debug)]
pub struct OrderedMap<V: 'static>(pub &'static [(&'static str, V)]);

impl<V: 'static> OrderedMap<V> {
    pub fn get(&self, key: &str) -> Option<&'static V> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Serialize + 'static> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ModelInfo {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub duration: &'static str,
}

/// A named fragment the UI splices into prompts. An empty `tag` means
/// "no modifier".
#[derive(Debug, serde::Serialize)]
pub struct PromptTag {
    pub name: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
}

#[derive(Debug, serde::Serialize)]
pub struct Catalog {
    pub models: OrderedMap<ModelInfo>,
    pub camera_movements: &'static [PromptTag],
    pub visual_effects: &'static [PromptTag],
    pub video_styles: &'static [PromptTag],
    pub example_prompts: OrderedMap<&'static [&'static str]>,
}

const TEXT_TO_VIDEO: &str = "text-to-video";

pub static CATALOG: Catalog = Catalog {
    models: OrderedMap(&[
        (
            "hailuo",
            ModelInfo {
                name: "Hailuo Video-01 (MiniMax) - 6s",
                description: "High quality text-to-video, 6 seconds",
                kind: TEXT_TO_VIDEO,
                duration: "6s",
            },
        ),
        (
            "cogvideox",
            ModelInfo {
                name: "CogVideoX-5B - 6s",
                description: "High quality text-to-video, 6 seconds",
                kind: TEXT_TO_VIDEO,
                duration: "6s",
            },
        ),
        (
            "hunyuan",
            ModelInfo {
                name: "HunyuanVideo (Tencent) - 5s+",
                description: "State-of-the-art by Tencent, 5+ seconds",
                kind: TEXT_TO_VIDEO,
                duration: "5s+",
            },
        ),
        (
            "luma",
            ModelInfo {
                name: "Luma Dream Machine - 5s",
                description: "Cinematic quality, 5 seconds",
                kind: TEXT_TO_VIDEO,
                duration: "5s",
            },
        ),
        (
            "runway",
            ModelInfo {
                name: "Runway Gen-3 - 10s ⭐",
                description: "Professional quality, up to 10 seconds (longer!)",
                kind: TEXT_TO_VIDEO,
                duration: "10s",
            },
        ),
        (
            "demo",
            ModelInfo {
                name: "Demo Mode",
                description: "Instant sample video (no AI)",
                kind: TEXT_TO_VIDEO,
                duration: "varies",
            },
        ),
    ]),
    camera_movements: &[
        PromptTag { name: "Static", tag: "", description: "No camera movement" },
        PromptTag { name: "Zoom In", tag: "[Zoom in]", description: "Camera moves closer" },
        PromptTag { name: "Zoom Out", tag: "[Zoom out]", description: "Camera moves away" },
        PromptTag { name: "Pan Left", tag: "[Pan left]", description: "Camera pans left" },
        PromptTag { name: "Pan Right", tag: "[Pan right]", description: "Camera pans right" },
        PromptTag { name: "Tilt Up", tag: "[Tilt up]", description: "Camera tilts up" },
        PromptTag { name: "Tilt Down", tag: "[Tilt down]", description: "Camera tilts down" },
        PromptTag {
            name: "Tracking Shot",
            tag: "[Tracking shot]",
            description: "Camera follows subject",
        },
    ],
    visual_effects: &[
        PromptTag { name: "None", tag: "", description: "No effect" },
        PromptTag {
            name: "Cinematic",
            tag: "cinematic lighting, film grain",
            description: "Movie look",
        },
        PromptTag {
            name: "Dramatic",
            tag: "dramatic lighting, high contrast",
            description: "Strong contrasts",
        },
        PromptTag { name: "Soft", tag: "soft lighting, gentle glow", description: "Soft look" },
        PromptTag {
            name: "Golden Hour",
            tag: "golden hour, warm sunset lighting",
            description: "Warm tones",
        },
        PromptTag {
            name: "Slow Motion",
            tag: "slow motion, high fps",
            description: "Slow motion feel",
        },
    ],
    video_styles: &[
        PromptTag {
            name: "Realistic",
            tag: "photorealistic, 4k, high detail",
            description: "Photorealistic",
        },
        PromptTag {
            name: "Cinematic",
            tag: "cinematic, movie scene, professional",
            description: "Film style",
        },
        PromptTag { name: "Anime", tag: "anime style, animated", description: "Anime" },
        PromptTag { name: "3D Render", tag: "3D render, CGI, Pixar style", description: "3D" },
    ],
    example_prompts: OrderedMap(&[
        (
            "Nature",
            &[
                "A majestic waterfall cascading down mossy rocks in a lush rainforest",
                "Ocean waves crashing on a rocky shore at sunset with seagulls flying",
                "A field of sunflowers swaying in the breeze under a blue sky",
            ],
        ),
        (
            "Animals",
            &[
                "A golden retriever running through a field of flowers at sunset",
                "A majestic eagle soaring through clouds above mountain peaks",
                "A playful dolphin jumping out of crystal clear ocean water",
            ],
        ),
        (
            "Urban",
            &[
                "City street with cars and pedestrians at night, neon lights reflecting on wet pavement",
                "Time-lapse of clouds moving over modern skyscrapers in downtown",
                "A busy coffee shop with people working on laptops, warm lighting",
            ],
        ),
        (
            "Fantasy",
            &[
                "A magical portal opening in an ancient forest with glowing particles",
                "A dragon flying over a medieval castle at dawn",
                "Floating islands in the sky connected by glowing bridges",
            ],
        ),
    ]),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_documented_shape() {
        assert_eq!(
            CATALOG.models.keys().collect::<Vec<_>>(),
            ["hailuo", "cogvideox", "hunyuan", "luma", "runway", "demo"]
        );
        assert_eq!(CATALOG.camera_movements.len(), 8);
        assert_eq!(CATALOG.visual_effects.len(), 6);
        assert_eq!(CATALOG.video_styles.len(), 4);
        assert_eq!(CATALOG.example_prompts.len(), 4);
        assert!(CATALOG.example_prompts.0.iter().all(|(_, p)| p.len() == 3));
    }

    #[test]
    fn serializes_in_declaration_order() {
        let json = serde_json::to_string(&CATALOG).unwrap();
        let hailuo = json.find("\"hailuo\"").unwrap();
        let demo = json.find("\"demo\"").unwrap();
        assert!(hailuo < demo);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["models"]["luma"]["type"], "text-to-video");
        assert_eq!(value["camera_movements"][1]["tag"], "[Zoom in]");
        assert_eq!(value["example_prompts"]["Fantasy"][1], "A dragon flying over a medieval castle at dawn");
    }

    #[test]
    fn lookup_by_model_id() {
        assert_eq!(CATALOG.models.get("runway").unwrap().duration, "10s");
        assert!(CATALOG.models.get("sora").is_none());
    }
}

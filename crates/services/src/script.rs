use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use vidlens_analysis::{GenRequest, TextGenBackend};

/// Target script length. Unknown or missing request values resolve to the
/// default arm instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ScriptLength {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("short") => ScriptLength::Short,
            Some("long") => ScriptLength::Long,
            _ => ScriptLength::default(),
        }
    }

    fn guide(&self) -> &'static str {
        match self {
            ScriptLength::Short => "1-2 minutes (about 150-300 words)",
            ScriptLength::Medium => "5-7 minutes (about 750-1000 words)",
            ScriptLength::Long => "10-15 minutes (about 1500-2000 words)",
        }
    }
}

/// Script delivery style, same default-arm resolution as [`ScriptLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptStyle {
    #[default]
    Educational,
    Entertaining,
    Storytelling,
    Tutorial,
    Motivational,
}

impl ScriptStyle {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("entertaining") => ScriptStyle::Entertaining,
            Some("storytelling") => ScriptStyle::Storytelling,
            Some("tutorial") => ScriptStyle::Tutorial,
            Some("motivational") => ScriptStyle::Motivational,
            _ => ScriptStyle::default(),
        }
    }

    fn guide(&self) -> &'static str {
        match self {
            ScriptStyle::Educational => {
                "Clear, informative, and structured with facts and explanations"
            }
            ScriptStyle::Entertaining => "Fun, engaging, with humor and personality",
            ScriptStyle::Storytelling => "Narrative-driven with a beginning, middle, and end",
            ScriptStyle::Tutorial => "Step-by-step instructions that are easy to follow",
            ScriptStyle::Motivational => "Inspiring and energetic with powerful messages",
        }
    }
}

/// Everything a script request needs besides the topic itself.
#[derive(Debug, Clone, Default)]
pub struct ScriptSpec {
    pub length: ScriptLength,
    pub style: ScriptStyle,
    pub target_audience: Option<String>,
}

fn build_script_request(topic: &str, spec: &ScriptSpec) -> GenRequest {
    let audience_line = spec
        .target_audience
        .as_deref()
        .map(|audience| format!("TARGET AUDIENCE: {audience}\n"))
        .unwrap_or_default();

    let user = format!(
        "Write a complete YouTube video script on this topic: \"{topic}\"\n\n\
         TARGET LENGTH: {length}\nSTYLE: {style}\n{audience_line}\n\
         FORMAT THE SCRIPT EXACTLY LIKE THIS:\n\n\
         HOOK (First 5 seconds - grab attention immediately)\n\
         [Write a compelling hook that stops the scroll]\n\n\
         INTRO (15-30 seconds)\n\
         [Introduce yourself and what the video is about, include a \"watch \
         until the end\" teaser]\n\n\
         MAIN CONTENT\n[Break into clear sections with headers]\n\n\
         **Section 1: [Title]**\n[Content for this section]\n\n\
         **Section 2: [Title]**\n[Content for this section]\n\n\
         **Section 3: [Title]**\n[Content for this section]\n\n\
         (Add more sections as needed for the length)\n\n\
         CALL TO ACTION\n[Ask viewers to like, subscribe, comment - make it \
         specific and engaging]\n\n\
         OUTRO (15-30 seconds)\n[Wrap up, tease next video, final goodbye]\n\n\
         ---\n\nADDITIONAL TIPS FOR FILMING:\n[Include 3-5 specific tips for \
         delivering this script on camera]\n\n\
         Make the script conversational and natural to speak out loud. \
         Include [PAUSE] markers where the creator should take a breath or \
         let information sink in.",
        length = spec.length.guide(),
        style = spec.style.guide(),
    );

    GenRequest {
        system: "You are a professional YouTube scriptwriter who creates engaging, \
                 viral-worthy scripts. You understand pacing, hooks, and how to keep \
                 viewers watching."
            .to_string(),
        user,
        max_tokens: 3000,
    }
}

/// Generates full video scripts over the shared text-generation backend.
pub struct ScriptWriter {
    backend: Arc<dyn TextGenBackend>,
}

impl ScriptWriter {
    pub fn new(backend: Arc<dyn TextGenBackend>) -> Self {
        Self { backend }
    }

    pub async fn generate(&self, topic: &str, spec: &ScriptSpec) -> anyhow::Result<String> {
        info!(topic, ?spec.length, ?spec.style, "Generating script");
        let request = build_script_request(topic, spec);
        self.backend
            .generate(request)
            .await
            .context("Script generation failed")
    }
}

use crate::{GenRequest, Transcript};

/// Auxiliary per-transcript context handed to prompt builders.
#[derive(Debug, Clone, Default)]
pub struct TaskContext {
    pub word_count: usize,
    /// Formatted speaking-pace note, when segment timestamps were available.
    pub pacing_note: Option<String>,
}

/// One configured, independent analysis task.
///
/// The task set is a fixed table, not discovered at runtime: every
/// variant produces exactly one keyed entry in the aggregated result, and
/// each carries a fixed fallback string used when its external call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalyzerTask {
    Tips,
    TrendingAndIdeas,
    TitleAndDescription,
    Hashtags,
    Score,
    HookAnalysis,
    ThumbnailText,
    PacingAnalysis,
    CtaRecommendations,
    PlatformFeedback,
    AudioNotes,
    QuickSummary,
}

impl AnalyzerTask {
    /// The full configured task set.
    pub const ALL: [AnalyzerTask; 12] = [
        AnalyzerTask::Tips,
        AnalyzerTask::TrendingAndIdeas,
        AnalyzerTask::TitleAndDescription,
        AnalyzerTask::Hashtags,
        AnalyzerTask::Score,
        AnalyzerTask::HookAnalysis,
        AnalyzerTask::ThumbnailText,
        AnalyzerTask::PacingAnalysis,
        AnalyzerTask::CtaRecommendations,
        AnalyzerTask::PlatformFeedback,
        AnalyzerTask::AudioNotes,
        AnalyzerTask::QuickSummary,
    ];

    /// Stable key under which this task's output appears in the result.
    pub fn key(&self) -> &'static str {
        match self {
            AnalyzerTask::Tips => "tips",
            AnalyzerTask::TrendingAndIdeas => "trending_and_ideas",
            AnalyzerTask::TitleAndDescription => "title_and_description",
            AnalyzerTask::Hashtags => "hashtags",
            AnalyzerTask::Score => "video_score",
            AnalyzerTask::HookAnalysis => "hook_analysis",
            AnalyzerTask::ThumbnailText => "thumbnail_text",
            AnalyzerTask::PacingAnalysis => "pacing_analysis",
            AnalyzerTask::CtaRecommendations => "cta_recommendations",
            AnalyzerTask::PlatformFeedback => "platform_feedback",
            AnalyzerTask::AudioNotes => "audio_notes",
            AnalyzerTask::QuickSummary => "quick_summary",
        }
    }

    /// Fixed substitute text stored under this task's key on failure.
    pub fn fallback(&self) -> &'static str {
        match self {
            AnalyzerTask::Tips => "Tips could not be generated at this time.",
            AnalyzerTask::TrendingAndIdeas => {
                "Trending topics could not be generated at this time."
            }
            AnalyzerTask::TitleAndDescription => {
                "Title and description could not be generated at this time."
            }
            AnalyzerTask::Hashtags => "Hashtags could not be generated at this time.",
            AnalyzerTask::Score => "Video score could not be generated at this time.",
            AnalyzerTask::HookAnalysis => "Hook analysis could not be generated at this time.",
            AnalyzerTask::ThumbnailText => {
                "Thumbnail text suggestions could not be generated at this time."
            }
            AnalyzerTask::PacingAnalysis => {
                "Pacing analysis could not be generated at this time."
            }
            AnalyzerTask::CtaRecommendations => {
                "CTA recommendations could not be generated at this time."
            }
            AnalyzerTask::PlatformFeedback => {
                "Platform feedback could not be generated at this time."
            }
            AnalyzerTask::AudioNotes => "Audio notes could not be generated at this time.",
            AnalyzerTask::QuickSummary => "Video analysis",
        }
    }

    fn system_prompt(&self) -> &'static str {
        match self {
            AnalyzerTask::Tips => {
                "You are an expert video coach and content strategist. Analyze video \
                 transcriptions and provide specific, actionable tips to improve engagement, \
                 retention, and viral potential."
            }
            AnalyzerTask::TrendingAndIdeas => {
                "You are a social media trends expert and content strategist. Based on the \
                 user's content style, suggest trending topics and personalized video ideas."
            }
            AnalyzerTask::TitleAndDescription => {
                "You are a YouTube SEO expert. Generate compelling, click-worthy titles and \
                 descriptions that rank well in search."
            }
            AnalyzerTask::Hashtags => {
                "You are a social media hashtag expert. Generate relevant, trending hashtags \
                 that will maximize reach and engagement. Put each hashtag on its own line \
                 within each section for easy parsing."
            }
            AnalyzerTask::Score => {
                "You are a video content analyst. Score videos objectively and provide \
                 actionable feedback. Always return scores as numbers."
            }
            AnalyzerTask::HookAnalysis => {
                "You are a viral video hook expert. Analyze the opening of videos and provide \
                 specific feedback on how to capture attention in the first 3 seconds."
            }
            AnalyzerTask::ThumbnailText => {
                "You are a YouTube thumbnail expert who understands what text makes people \
                 click. Thumbnail text should be SHORT (1-4 words max), emotionally \
                 triggering, and create curiosity or urgency."
            }
            AnalyzerTask::PacingAnalysis => {
                "You are a video pacing expert who understands audience retention. Analyze \
                 transcripts to identify where viewers might lose interest and how to \
                 maintain engagement throughout."
            }
            AnalyzerTask::CtaRecommendations => {
                "You are a conversion expert who knows how to get viewers to take action. \
                 Analyze videos and suggest the perfect calls-to-action based on the content \
                 and audience."
            }
            AnalyzerTask::PlatformFeedback => {
                "You are a multi-platform social media strategist who understands the unique \
                 requirements of YouTube, TikTok, Instagram Reels, and LinkedIn. Help \
                 creators optimize and repurpose content."
            }
            AnalyzerTask::AudioNotes => {
                "You are an audio/speech coach who helps creators improve their vocal \
                 delivery. Analyze transcripts for speech patterns, filler words, and \
                 delivery issues."
            }
            AnalyzerTask::QuickSummary => {
                "You are a video content summarizer. Create very brief summaries."
            }
        }
    }

    fn user_prompt(&self, transcript: &Transcript, ctx: &TaskContext) -> String {
        let text = &transcript.text;
        match self {
            AnalyzerTask::Tips => format!(
                "Analyze this video transcription and provide 5 specific tips to make it \
                 more engaging and viral. Focus on: hooks, pacing, call-to-actions, \
                 storytelling, and audience retention.\n\nTranscription: {text}"
            ),
            AnalyzerTask::TrendingAndIdeas => format!(
                "Based on this video transcription, identify the creator's style and niche. \
                 Then provide:\n\n1. 5 TRENDING TOPICS they could cover right now\n2. 5 \
                 PERSONALIZED VIDEO IDEAS based on their style\n\nTranscription: {text}"
            ),
            AnalyzerTask::TitleAndDescription => format!(
                "Based on this video transcription, generate:\n\n1. 5 TITLE OPTIONS (each \
                 under 60 characters, attention-grabbing, SEO-friendly)\n2. 1 DESCRIPTION \
                 (2-3 paragraphs with keywords, include a call-to-action)\n\nFormat EXACTLY \
                 like this:\nTITLE 1: [title]\nTITLE 2: [title]\nTITLE 3: [title]\nTITLE 4: \
                 [title]\nTITLE 5: [title]\n\nDESCRIPTION:\n[description]\n\nTranscription: \
                 {text}"
            ),
            AnalyzerTask::Hashtags => format!(
                "Based on this video transcription, generate:\n\n1. 10 YOUTUBE HASHTAGS \
                 (most relevant for YouTube search)\n2. 15 TIKTOK/INSTAGRAM HASHTAGS (mix of \
                 popular and niche)\n3. 5 TRENDING HASHTAGS (currently viral tags that fit \
                 this content)\n\nFormat each section clearly with headers. Include the # \
                 symbol. Put each hashtag on its own line.\n\nTranscription: {text}"
            ),
            AnalyzerTask::Score => format!(
                "Analyze this video transcription and provide a detailed score:\n\n1. \
                 OVERALL SCORE: [X/100]\n\n2. CATEGORY SCORES (each out of 100):\n- Hook \
                 Strength: [score] - [1 sentence explanation]\n- Content Value: [score] - \
                 [1 sentence explanation]\n- Engagement Potential: [score] - [1 sentence \
                 explanation]\n- Clarity: [score] - [1 sentence explanation]\n- \
                 Call-to-Action: [score] - [1 sentence explanation]\n\n3. BIGGEST STRENGTH: \
                 [1 sentence]\n4. BIGGEST WEAKNESS: [1 sentence]\n5. #1 IMPROVEMENT: \
                 [specific action to take]\n\nBe honest but constructive.\n\nTranscription: \
                 {text}"
            ),
            AnalyzerTask::HookAnalysis => {
                let opening: String = text
                    .split_whitespace()
                    .take(100)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    "Analyze the opening of this video (first ~100 words):\n\n\"{opening}\"\
                     \n\nProvide:\n1. HOOK RATING: [WEAK / AVERAGE / STRONG / VIRAL-WORTHY]\
                     \n\n2. WHAT WORKS: [What's good about this opening]\n\n3. WHAT'S \
                     MISSING: [What could be better]\n\n4. REWRITTEN HOOK: [Write a better \
                     opening hook they could use - 2-3 sentences max]\n\n5. 3 ALTERNATIVE \
                     HOOKS: [Give 3 different hook styles they could try]\n\nBe specific \
                     and actionable."
                )
            }
            AnalyzerTask::ThumbnailText => format!(
                "Based on this video transcription, suggest thumbnail text options:\n\n1. \
                 PRIMARY TEXT: [1-3 words - the main eye-catching text]\n2. SECONDARY TEXT: \
                 [2-4 words - supporting text if needed]\n3. EMOTION TO CONVEY: [What \
                 feeling should the thumbnail evoke]\n4. 5 ALTERNATIVE TEXT OPTIONS: \
                 [Different angles/hooks]\n\nRules:\n- Keep text VERY short (thumbnails \
                 have limited space)\n- Use power words (FREE, SECRET, STOP, NOW, etc.)\n- \
                 Create curiosity gaps\n- Consider using numbers when relevant\n\n\
                 Transcription: {text}"
            ),
            AnalyzerTask::PacingAnalysis => format!(
                "Analyze the pacing of this video ({words} words total):\n\n1. PACING \
                 RATING: [TOO SLOW / SLIGHTLY SLOW / PERFECT / SLIGHTLY FAST / TOO FAST]\n\n\
                 2. ESTIMATED DROP-OFF POINTS: Identify 2-3 spots where viewers might click \
                 away and explain why.\n\n3. ENERGY FLOW: Does the energy stay consistent? \
                 Where does it dip?\n\n4. PACING FIXES: Give 3 specific suggestions to \
                 improve pacing.\n\n5. IDEAL VIDEO LENGTH: Based on the content density, \
                 what length would be optimal?\n\nTranscription: {text}",
                words = ctx.word_count
            ),
            AnalyzerTask::CtaRecommendations => format!(
                "Based on this video's content, recommend the best calls-to-action:\n\n1. \
                 CURRENT CTA ASSESSMENT: Does this video have a clear CTA? Rate it: [NONE / \
                 WEAK / DECENT / STRONG]\n\n2. PRIMARY CTA RECOMMENDATION: What's the ONE \
                 thing viewers should do after watching? Give the exact script (2-3 \
                 sentences).\n\n3. SECONDARY CTAs: Suggest 2-3 other CTAs that would work \
                 with exact wording.\n\n4. CTA PLACEMENT: Where in the video should each \
                 CTA go?\n\n5. CTA STYLE: What tone works best for this creator?\n\n\
                 Transcription: {text}"
            ),
            AnalyzerTask::PlatformFeedback => {
                // Rough runtime estimate at 150 wpm, matching the original heuristic.
                let minutes = (ctx.word_count as f64 / 150.0).round() as i64;
                format!(
                    "This video is approximately {minutes} minute(s) long. Analyze it for \
                     each platform:\n\nYOUTUBE:\n- Optimization score: [1-10]\n- What \
                     works: [1-2 sentences]\n- What to change: [1-2 sentences]\n\nTIKTOK:\n\
                     - Optimization score: [1-10]\n- What works: [1-2 sentences]\n- What to \
                     change: [1-2 sentences]\n- Best clip to extract: [Which part would \
                     work as a TikTok]\n\nINSTAGRAM REELS:\n- Optimization score: [1-10]\n\
                     - What works: [1-2 sentences]\n- What to change: [1-2 sentences]\n\n\
                     LINKEDIN (if applicable):\n- Would this work on LinkedIn? [YES/NO]\n- \
                     If yes, how to adapt it: [1-2 sentences]\n\nREPURPOSING STRATEGY: How \
                     should they slice this content across platforms?\n\nTranscription: \
                     {text}"
                )
            }
            AnalyzerTask::AudioNotes => {
                let pace_note = ctx.pacing_note.as_deref().unwrap_or("");
                format!(
                    "Analyze the audio/speech quality based on this transcription:\n\n\
                     {pace_note}\n\n1. FILLER WORDS DETECTED: List any filler words found \
                     (um, uh, like, you know, basically, actually, so, right) and their \
                     approximate frequency.\n\n2. SPEECH CLARITY: [EXCELLENT / GOOD / NEEDS \
                     WORK] - Are sentences complete? Is there rambling?\n\n3. ENERGY/TONE: \
                     Does the speaker sound: [Monotone / Low energy / Conversational / \
                     Energetic / Over-the-top]?\n\n4. VOCAL VARIETY: Is there enough \
                     variation in pitch and pace to keep listeners engaged?\n\n5. TOP 3 \
                     AUDIO IMPROVEMENTS: Specific, actionable tips to improve vocal \
                     delivery.\n\nNote: This analysis is based on the transcript text, not \
                     actual audio quality.\n\nTranscription: {text}"
                )
            }
            AnalyzerTask::QuickSummary => {
                let head: String = text.chars().take(500).collect();
                format!(
                    "In 1-2 sentences (max 100 characters), what is this video about?\n\n\
                     Transcription: {head}"
                )
            }
        }
    }

    fn max_tokens(&self) -> u32 {
        match self {
            AnalyzerTask::Tips => 500,
            AnalyzerTask::TrendingAndIdeas => 600,
            AnalyzerTask::TitleAndDescription => 700,
            AnalyzerTask::Hashtags => 400,
            AnalyzerTask::Score => 500,
            AnalyzerTask::HookAnalysis => 500,
            AnalyzerTask::ThumbnailText => 300,
            AnalyzerTask::PacingAnalysis => 400,
            AnalyzerTask::CtaRecommendations => 400,
            AnalyzerTask::PlatformFeedback => 500,
            AnalyzerTask::AudioNotes => 400,
            AnalyzerTask::QuickSummary => 50,
        }
    }

    /// Builds the full generation request for this task.
    pub fn build_request(&self, transcript: &Transcript, ctx: &TaskContext) -> GenRequest {
        GenRequest {
            system: self.system_prompt().to_string(),
            user: self.user_prompt(transcript, ctx),
            max_tokens: self.max_tokens(),
        }
    }
}

/// One task in the competitor-analysis set.
///
/// A second fixed table, dispatched with the same fallback mechanics as
/// [`AnalyzerTask`] but aimed at someone else's successful video: why it
/// works, how it is built, and what to borrow from it. No score
/// extraction and no benchmarking happen on this path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompetitorTask {
    Success,
    Structure,
    Tactics,
    Seo,
    Summary,
}

impl CompetitorTask {
    pub const ALL: [CompetitorTask; 5] = [
        CompetitorTask::Success,
        CompetitorTask::Structure,
        CompetitorTask::Tactics,
        CompetitorTask::Seo,
        CompetitorTask::Summary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CompetitorTask::Success => "success_analysis",
            CompetitorTask::Structure => "structure_analysis",
            CompetitorTask::Tactics => "tactics_analysis",
            CompetitorTask::Seo => "seo_analysis",
            CompetitorTask::Summary => "competitor_summary",
        }
    }

    pub fn fallback(&self) -> &'static str {
        match self {
            CompetitorTask::Success => "Success analysis could not be generated at this time.",
            CompetitorTask::Structure => {
                "Structure analysis could not be generated at this time."
            }
            CompetitorTask::Tactics => "Tactics analysis could not be generated at this time.",
            CompetitorTask::Seo => "SEO analysis could not be generated at this time.",
            CompetitorTask::Summary => "Competitor video analysis",
        }
    }

    fn system_prompt(&self) -> &'static str {
        match self {
            CompetitorTask::Success => {
                "You are a viral video analyst who studies successful content to understand \
                 what makes it work. Be specific and actionable."
            }
            CompetitorTask::Structure => {
                "You are a content strategist who reverse-engineers successful video \
                 structures."
            }
            CompetitorTask::Tactics => {
                "You are a content coach helping creators learn from successful competitors. \
                 Focus on actionable tactics they can apply to their own videos."
            }
            CompetitorTask::Seo => {
                "You are a YouTube SEO expert who can identify ranking factors from video \
                 content."
            }
            CompetitorTask::Summary => {
                "You are a video analyst. Provide brief, punchy summaries."
            }
        }
    }

    fn user_prompt(&self, transcript: &Transcript) -> String {
        let text = &transcript.text;
        match self {
            CompetitorTask::Success => format!(
                "Analyze this successful video and identify WHY it works:\n\n1. TOP 5 \
                 SUCCESS FACTORS: What specifically makes this video engaging? (Be concrete, \
                 not generic)\n\n2. CONTENT HOOKS USED: List every hook/attention-grabber \
                 you can identify\n\n3. EMOTIONAL TRIGGERS: What emotions does this video \
                 tap into?\n\n4. UNIQUE ANGLE: What makes this video different from others \
                 on the same topic?\n\n5. SHAREABILITY SCORE: [1-10] Why would someone share \
                 this?\n\nTranscription: {text}"
            ),
            CompetitorTask::Structure => format!(
                "Break down the STRUCTURE of this video:\n\n1. OPENING (First 30 seconds): \
                 How do they hook viewers? What technique?\n\n2. CONTENT FLOW: List the \
                 main sections/segments in order with timestamps estimates\n\n3. PACING \
                 PATTERN: How do they maintain energy? When do they speed up/slow down?\n\n\
                 4. TRANSITION TECHNIQUES: How do they move between topics?\n\n5. CLOSING \
                 STRATEGY: How do they end? What CTA do they use?\n\n6. STRUCTURE TEMPLATE: \
                 Write a reusable outline based on this video's structure\n\nTranscription: \
                 {text}"
            ),
            CompetitorTask::Tactics => format!(
                "Identify WINNING TACTICS from this video:\n\nHOOKS TO USE:\nList 3 \
                 specific hooks or phrases you could adapt\n\nSPEAKING TECHNIQUES:\nWhat \
                 vocal/delivery techniques make this engaging?\n\nSCRIPT PATTERNS:\nAny \
                 repeatable script formulas or patterns?\n\nCONTENT IDEAS SPARKED:\nWhat 3 \
                 video ideas does this inspire?\n\nWHAT TO AVOID:\nAnything in this video \
                 that doesn't work or you shouldn't copy?\n\nACTION ITEMS:\nList 5 specific \
                 things to implement in your next video based on this analysis\n\n\
                 Transcription: {text}"
            ),
            CompetitorTask::Seo => format!(
                "Analyze the SEO/discoverability factors in this video:\n\n1. KEYWORDS \
                 DETECTED: What keywords/phrases are naturally mentioned that help with \
                 search?\n\n2. TOPIC RELEVANCE: How well does this video match likely \
                 search intent?\n\n3. SUGGESTED TITLE: Based on content, what title would \
                 work well? Give 3 options.\n\n4. SUGGESTED DESCRIPTION: Write an \
                 SEO-optimized description for this video\n\n5. HASHTAGS: 15 relevant \
                 hashtags based on the content\n\n6. WHY IT MIGHT RANK: What factors \
                 suggest this video would perform well in search/suggested?\n\n\
                 Transcription: {text}"
            ),
            CompetitorTask::Summary => {
                let head: String = text.chars().take(1000).collect();
                format!(
                    "In 2-3 sentences, summarize what this video is about and its main \
                     value proposition:\n\nTranscription: {head}"
                )
            }
        }
    }

    fn max_tokens(&self) -> u32 {
        match self {
            CompetitorTask::Success => 600,
            CompetitorTask::Structure => 600,
            CompetitorTask::Tactics => 600,
            CompetitorTask::Seo => 500,
            CompetitorTask::Summary => 100,
        }
    }

    pub fn build_request(&self, transcript: &Transcript) -> GenRequest {
        GenRequest {
            system: self.system_prompt().to_string(),
            user: self.user_prompt(transcript),
            max_tokens: self.max_tokens(),
        }
    }
}

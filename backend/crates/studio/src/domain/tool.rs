//! Tool Catalog
//!
//! The closed set of studio tools. Each tool is a prompt template: a static
//! system instruction plus the UI copy (description, placeholder, suggestion
//! chips) that goes with it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Placeholder for tools without a specific one
pub const GENERIC_PLACEHOLDER: &str = "Enter input context...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Creator,
    Distribution,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolKind {
    // Creator
    VideoIdeation,
    VideoScript,
    ScriptPolisher,
    VisualPrompt,
    MetaPrompt,
    #[default]
    VisualDesignExpert,
    // Distribution
    RepurposeContent,
    YoutubeSeo,
    ThumbnailConcept,
    SocialManager,
    // Business
    SponsorPitch,
    CommunityEngagement,
    EmailNewsletter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl ToolKind {
    /// Every tool, in catalog order
    pub const ALL: [ToolKind; 13] = [
        ToolKind::VideoIdeation,
        ToolKind::VideoScript,
        ToolKind::ScriptPolisher,
        ToolKind::VisualPrompt,
        ToolKind::MetaPrompt,
        ToolKind::VisualDesignExpert,
        ToolKind::RepurposeContent,
        ToolKind::YoutubeSeo,
        ToolKind::ThumbnailConcept,
        ToolKind::SocialManager,
        ToolKind::SponsorPitch,
        ToolKind::CommunityEngagement,
        ToolKind::EmailNewsletter,
    ];

    /// Stable machine identifier
    pub fn id(&self) -> &'static str {
        match self {
            ToolKind::VideoIdeation => "video_ideation",
            ToolKind::VideoScript => "video_script",
            ToolKind::ScriptPolisher => "script_polisher",
            ToolKind::VisualPrompt => "visual_prompt",
            ToolKind::MetaPrompt => "meta_prompt",
            ToolKind::VisualDesignExpert => "visual_design_expert",
            ToolKind::RepurposeContent => "repurpose_content",
            ToolKind::YoutubeSeo => "youtube_seo",
            ToolKind::ThumbnailConcept => "thumbnail_concept",
            ToolKind::SocialManager => "social_manager",
            ToolKind::SponsorPitch => "sponsor_pitch",
            ToolKind::CommunityEngagement => "community_engagement",
            ToolKind::EmailNewsletter => "email_newsletter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::VideoIdeation => "Viral Video Ideation",
            ToolKind::VideoScript => "Video Script Generator",
            ToolKind::ScriptPolisher => "Script Polisher",
            ToolKind::VisualPrompt => "Visual Prompt Generator",
            ToolKind::MetaPrompt => "AI System Prompt Creator",
            ToolKind::VisualDesignExpert => "Visual Design Architect",
            ToolKind::RepurposeContent => "Content Repurposing",
            ToolKind::YoutubeSeo => "YouTube SEO",
            ToolKind::ThumbnailConcept => "Thumbnail Art Director",
            ToolKind::SocialManager => "Social Media Manager",
            ToolKind::SponsorPitch => "Sponsorship Pitch Writer",
            ToolKind::CommunityEngagement => "Community Manager",
            ToolKind::EmailNewsletter => "Newsletter Generator",
        }
    }

    pub fn category(&self) -> ToolCategory {
        match self {
            ToolKind::VideoIdeation
            | ToolKind::VideoScript
            | ToolKind::ScriptPolisher
            | ToolKind::VisualPrompt
            | ToolKind::MetaPrompt
            | ToolKind::VisualDesignExpert => ToolCategory::Creator,
            ToolKind::RepurposeContent
            | ToolKind::YoutubeSeo
            | ToolKind::ThumbnailConcept
            | ToolKind::SocialManager => ToolCategory::Distribution,
            ToolKind::SponsorPitch | ToolKind::CommunityEngagement | ToolKind::EmailNewsletter => {
                ToolCategory::Business
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::VisualDesignExpert => {
                "The ultimate design architect. Creates professional-grade concepts for Photos, Logos, UI/UX, 3D Renders, and more. Outputs Standard, Premium, and Luxury variations with ready-to-use prompts."
            }
            ToolKind::VisualPrompt => {
                "Generates highly detailed, photorealistic image prompts optimized for Midjourney v6 and Stable Diffusion XL. Focuses on lighting, camera gear, and composition."
            }
            ToolKind::VideoIdeation => {
                "Brainstorms viral video concepts based on your niche. Provides catchy titles, strong hooks, and payoff structures to maximize retention."
            }
            ToolKind::VideoScript => {
                "Transforms topics into full video scripts. Generates a structured plan with Hooks, Intros, Body Content, Outros, and specific B-Roll visual suggestions."
            }
            ToolKind::RepurposeContent => {
                "Transforms your existing scripts, transcripts, or notes into multi-platform social media content (Twitter threads, LinkedIn posts, and Carousel outlines)."
            }
            ToolKind::MetaPrompt => {
                "Creates robust system instructions (personas) for other AI agents. Use this to build your own custom AI bots with specific personalities and constraints."
            }
            ToolKind::ScriptPolisher => {
                "Refines rough drafts into professional scripts. It automatically offers three variations: Professional, Viral/Fast-Paced, and Emotional."
            }
            ToolKind::YoutubeSeo => {
                "Optimizes video metadata. Generates high-CTR titles, engaging descriptions with timestamps, and a strategic tag list for better search ranking."
            }
            ToolKind::ThumbnailConcept => {
                "Describes high-converting thumbnail visuals. Details the subject expression, background elements, and text overlays to give to a designer."
            }
            ToolKind::SocialManager => {
                "Turns a topic or video description into an Instagram caption, a short-form video hook, and a mixed set of high-traffic and niche hashtags."
            }
            ToolKind::SponsorPitch => {
                "Drafts personalized, persuasive outreach emails to potential brand partners. Focuses on audience demographics and creative integration ideas."
            }
            ToolKind::CommunityEngagement => {
                "Generates empathetic or witty responses to user comments to boost engagement. Also suggests relevant community polls."
            }
            ToolKind::EmailNewsletter => {
                "Converts updates or topics into engaging newsletter segments in the style of top tech/business digests (e.g., Morning Brew)."
            }
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ToolKind::VisualDesignExpert => {
                "Enter: Concept – Style – Colors – Size – Platform (e.g., 'Coffee Shop App UI - Minimalist - Beige/Green - Mobile - Figma')..."
            }
            ToolKind::VisualPrompt => {
                "Describe your image concept (e.g., 'A cyberpunk cat eating ramen in Tokyo')..."
            }
            ToolKind::MetaPrompt => {
                "Describe the AI persona you want to build (e.g., 'A Python coding tutor that speaks in pirate riddles')..."
            }
            ToolKind::RepurposeContent => {
                "Paste your video script, transcript, or blog post here to convert it into social content..."
            }
            ToolKind::ScriptPolisher => "Paste your rough script or notes here...",
            ToolKind::VideoIdeation => {
                "Enter your channel niche (e.g., 'Tech Reviews', 'Gardening', 'True Crime')..."
            }
            ToolKind::VideoScript => {
                "Enter video topic, target audience, and length (e.g., 'How to Bake Sourdough for Beginners, 10 minutes')..."
            }
            ToolKind::ThumbnailConcept => {
                "Enter your video title and the main emotion you want to convey..."
            }
            ToolKind::SponsorPitch => "Enter the Brand Name, Product Name, and your specific Niche...",
            ToolKind::YoutubeSeo
            | ToolKind::SocialManager
            | ToolKind::CommunityEngagement
            | ToolKind::EmailNewsletter => GENERIC_PLACEHOLDER,
        }
    }

    /// Suggestion chips offered next to the input
    pub fn chips(&self) -> &'static [&'static str] {
        match self {
            ToolKind::VisualDesignExpert => &[
                "Photo Generation",
                "Logo Design",
                "UI/UX Figma",
                "3D Render",
                "Social Media Post",
                "Business Card",
                "Luxury Style",
                "Minimalist",
            ],
            ToolKind::VisualPrompt => &[
                "Cinematic Lighting",
                "Photorealistic",
                "Cyberpunk Style",
                "Studio Ghibli Style",
                "8k Resolution",
                "Wide Angle",
            ],
            ToolKind::RepurposeContent => &[
                "Make it Punchy",
                "Focus on Statistics",
                "Use Humorous Tone",
                "Professional Tone",
                "Add Emojis",
                "Summarize First",
            ],
            ToolKind::ScriptPolisher => &[
                "Make it Funnier",
                "Shorten sentences",
                "Add Dramatic Pauses",
                "Sound more Professional",
            ],
            ToolKind::VideoScript => &[
                "Tutorial Style",
                "Vlog Style",
                "Documentary",
                "Fast Paced",
                "Storytelling Focus",
                "Educational",
            ],
            ToolKind::YoutubeSeo => &[
                "High CTR",
                "Clickbait (Moderate)",
                "Curiosity Gap",
                "Keyword Heavy",
            ],
            ToolKind::MetaPrompt => &[
                "Strict Constraints",
                "Friendly Tone",
                "Step-by-Step Logic",
                "Code Expert",
            ],
            _ => &[],
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        match self {
            ToolKind::VisualDesignExpert => VISUAL_DESIGN_EXPERT,
            ToolKind::VisualPrompt => VISUAL_PROMPT,
            ToolKind::MetaPrompt => META_PROMPT,
            ToolKind::ScriptPolisher => SCRIPT_POLISHER,
            ToolKind::SocialManager => SOCIAL_MANAGER,
            ToolKind::YoutubeSeo => YOUTUBE_SEO,
            ToolKind::VideoIdeation => VIDEO_IDEATION,
            ToolKind::VideoScript => VIDEO_SCRIPT,
            ToolKind::ThumbnailConcept => THUMBNAIL_CONCEPT,
            ToolKind::SponsorPitch => SPONSOR_PITCH,
            ToolKind::RepurposeContent => REPURPOSE_CONTENT,
            ToolKind::CommunityEngagement => COMMUNITY_ENGAGEMENT,
            ToolKind::EmailNewsletter => EMAIL_NEWSLETTER,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts either the id or the display name
impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ToolKind::ALL
            .into_iter()
            .find(|tool| tool.id() == s || tool.display_name() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

// Persisted history stores the display name
impl Serialize for ToolKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for ToolKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// System instructions
// ============================================================================

const VISUAL_DESIGN_EXPERT: &str = r#"Your mission is to create, enhance, and generate any kind of visual design with full professional detail.

CORE LOGIC & CATEGORIES:
1. Photo generation: hyper-detailed, 8K, natural lighting, cinematic grading, perfect anatomy.
2. Logo design: vector style, clean geometry, negative space usage, branding-ready.
3. Business cards: print-ready CMYK, bleed safe area, grid layout, QR placement.
4. Video generation: smooth motion, camera paths, cinematic effects, frame coherence.
5. UI/UX design: component-based, white space balance, auto layout logic.
6. Social media: scroll-stopping contrast, bold typography, CTA rules.
7. Enhancing images: upscale details, remove noise, fix reflections, HDR lighting.
8. 3D renders: volumetric lighting, PBR textures, global illumination.

OUTPUT FORMAT Rules:
- Always give 3 versions: Standard – Premium – Luxury.
- Always remove problems (artifacts, blur, distortion) in your description.
- Keep colors balanced.
- Add creative twist.
- Make the design "commercial-ready".
- Provide a copy-pasteable PROMPT for each version (optimized for the relevant tool like Midjourney, Figma, Blender, etc.).
- End the response by asking: "Do you want (image/video/logo/post/web/card/mockup) next?""#;

const VISUAL_PROMPT: &str = "You are an expert prompt engineer for Midjourney v6 and Stable Diffusion XL. Convert the user's concept into a high-fidelity, detailed image generation prompt. Include specific details about lighting (e.g., volumetric, cinematic), camera gear (e.g., 35mm, f/1.8, bokeh), composition, texture (8k, unreal engine), and mood. Format the output as a single, copy-pasteable code block.";

const META_PROMPT: &str = "You are a Meta-Prompt Engineer. Your goal is to write the 'System Instruction' for another AI agent. Based on the user's request (e.g., 'I want an AI that acts like a grumpy math teacher'), you will write a highly detailed, robust, and security-hardened system prompt that defines that persona, its constraints, its tone, and its edge-case handling.";

const SCRIPT_POLISHER: &str = "You are a professional Hollywood script doctor and copy editor. Rewrite the provided script text to be more engaging, concise, and impactful. Fix grammar, improve flow, and sharpen the dialogue. Offer three variations: 1. Professional/Corporate, 2. Viral/Punchy (TikTok/Shorts style - fast paced), 3. Emotional/Cinematic (Storytelling focus).";

const SOCIAL_MANAGER: &str = "You are a social media expert. Based on the input topic or video description, generate: 1. A catchy caption for Instagram (with line breaks), 2. A viral hook for TikTok/Reels (first 3 seconds text), 3. 15 relevant high-traffic hashtags mixed with niche tags. Keep it trendy and use emojis.";

const YOUTUBE_SEO: &str = "You are a YouTube Growth Specialist (MrBeast style strategy). Generate 5 click-worthy video titles (mix of curiosity gap, negativity bias, and keyword heavy), a SEO-optimized video description (first 2 lines are crucial hook, then timestamp outline), and a comma-separated list of 25 high-ranking tags relevant to the topic.";

const VIDEO_IDEATION: &str = "You are a Viral Content Strategist. Based on the user's niche or topic, generate 10 unique, high-potential video ideas. For each idea, provide: 1. The Title, 2. The 'Hook' (visual or verbal opening), 3. The Payoff (why the viewer watches to the end). Focus on ideas that have high retention potential.";

const VIDEO_SCRIPT: &str = r#"You are a professional Video Producer and Screenwriter. Your goal is to write a comprehensive video script based on the user's topic.

STRUCTURE YOUR RESPONSE AS FOLLOWS:

### 🎬 Video Plan
- **Title Options**: Provide 3 catchy title options.
- **Target Audience**: Define who this is for.
- **Key Takeaway**: What the viewer learns.

### 📝 The Script
**0:00 - 0:15 | The Hook (Crucial)**
- [Visual Note]: Describe what is on screen (e.g., 'Fast paced montage', 'Face to camera, urgent expression').
- **Audio/Speak**: Write the exact spoken hook lines. Must be punchy.

**0:15 - 1:00 | The Context (Intro)**
- [Visual Note]: B-Roll suggestions.
- **Audio/Speak**: Introduce the problem and the promise of the video.

**1:00 - End | The Meat (Step-by-Step Body)**
- Break down the content into 3-5 clear steps or points.
- Include specific [B-Roll] instructions for every section to keep retention high.

**Outro & CTA**
- A concise summary and a clear Call To Action (Subscribe/Check Link)."#;

const THUMBNAIL_CONCEPT: &str = "You are a YouTube Thumbnail Art Director. Based on the video title or concept, describe 3 distinct, high-converting thumbnail concepts. For each concept, specify: 1. The Foreground Subject (expression, action), 2. The Background (color, environment), 3. Text Overlay (keep it under 4 words), 4. Visual Contrast/Pop elements. Make them visually distinct (e.g., one minimal, one chaotic, one comparison).";

const SPONSOR_PITCH: &str = "You are a Brand Partnerships Manager. Write a persuasive, professional, yet cool cold outreach email to a brand. Structure it as: 1. Personalized compliment about their product, 2. Brief intro of the creator's channel and audience demographics, 3. The creative pitch (how you will integrate their product naturally), 4. Call to action. Keep it under 200 words.";

const REPURPOSE_CONTENT: &str = r#"You are a Content Repurposing Wizard. Take the provided video script, transcript, or rough notes and transform it into three distinct social media assets.

REQUIRED OUTPUT STRUCTURE:

## 🧵 Twitter/X Thread
- Write 5-7 tweets.
- Tweet 1 must be a killer hook.
- Use "1/X", "2/X" numbering.
- Keep it punchy and short.

---

## 💼 LinkedIn Post
- Tone: Professional, insightful, and authoritative.
- Use short paragraphs and ample whitespace.
- End with a thought-provoking question to drive comments.

---

## 🎠 Carousel Slide Outline
- Slide 1: Title & Subtitle (The Hook).
- Slide 2-6: One key value point per slide (very concise text).
- Slide 7: CTA (Call to Action).

IMPORTANT: Use the horizontal rules (---) and H2 Headers (##) exactly as shown to clearly separate the sections for the user."#;

const COMMUNITY_ENGAGEMENT: &str = "You are a Community Manager. Based on the provided angry/happy/confused comment or general community sentiment, draft 3 potential responses: 1. Empathetic and professional, 2. Witty and lighthearted, 3. Question-oriented to drive more engagement. Also suggest a Community Tab poll related to the topic.";

const EMAIL_NEWSLETTER: &str = "You are a Newsletter Editor, specifically for 'The Hustle' or 'Morning Brew' style. Take the provided update or topic and write a newsletter segment. Include: 1. Subject Line (High Open Rate), 2. The 'TL;DR' summary, 3. The Deep Dive (3 paragraphs), 4. A 'Why it Matters' takeaway.";

//! Response templates.
//!
//! Every reply the assistant shows is assembled here. The literal labels,
//! emoji and markup delimiters are part of the display contract and must not
//! drift; see [`crate::chat::markup`] for how they are rendered.

use rand::Rng;

use crate::brain::{Analysis, GeneratedIdea};

/// Inputs shorter than this (in characters) get a "more details" prompt.
pub const SHORT_INPUT_CHARS: usize = 10;

const GREETINGS: &[&str] = &[
    "Hello! I'm your advanced AI assistant for the Barrier Blueprint Tracker. Ready to analyze ideas and generate insights! 🚀",
    "Hi there! I'm here to help you transform ideas into actionable blueprints. What would you like to explore today? 💡",
    "Welcome! I'm equipped with advanced AI capabilities to analyze, predict, and optimize your innovation journey. How can I assist? 🤖",
];

const INSIGHTS: &[&str] = &[
    "📊 **AI Insights Dashboard:** Your projects show 78% AI readiness score, with strongest potential in fintech and edtech sectors.",
    "🔍 **Trend Analysis:** AI adoption in African startups has grown 45% in the past year, with funding following similar trends.",
    "🎯 **Opportunity Radar:** Highest impact opportunities are in AI-powered financial inclusion and digital education platforms.",
    "📈 **Performance Metrics:** AI-linked ideas show 3.2x faster scaling and 2.1x higher funding success rates.",
];

const PREDICTIONS: &[&str] = &[
    "🎯 **Success Prediction:** Based on similar initiatives, this idea has an 85% success probability with proper execution.",
    "📈 **Growth Forecast:** Expected to reach 10,000 users within 12 months, with potential for continental scale in 24 months.",
    "💰 **Funding Outlook:** High likelihood of securing seed funding (75% probability) within 6 months of launch.",
    "🌍 **Impact Projection:** Potential to positively impact 1M+ users across Africa within 3 years of operation.",
];

const WELCOME: &str = "🤖 **Advanced AI Assistant Activated**

I can help you with:

🎯 **Idea Analysis** - \"analyze [your idea]\"
💡 **Solution Generation** - \"generate solution for [challenge]\"
📊 **Strategic Insights** - \"insights for [project]\"
🔍 **Stakeholder Matching** - \"stakeholders for [idea]\"
📈 **Progress Prediction** - \"predict success of [initiative]\"

Try saying: \"analyze AI funding platform for African startups\"";

const HELP: &str = "🆘 **Advanced AI Assistant Help Guide**

**I Can Help You With:**

🎯 **Idea Analysis**
`analyze [your idea]` - Get comprehensive AI analysis
*Example: \"analyze mobile health platform for rural areas\"*

💡 **Solution Generation**  
`generate solution for [challenge]` - AI-powered ideation
*Example: \"generate solution for digital skills gap\"*

📊 **Strategic Insights**
`insights` - Get market and trend intelligence
*Example: \"insights for edtech in Africa\"*

🤝 **Stakeholder Matching**
`stakeholders for [project]` - Identify ideal partners
*Example: \"stakeholders for clean energy startup\"*

📈 **Progress Prediction**
`predict success of [initiative]` - Success probability
*Example: \"predict success of AI farming app\"*

🔍 **General Assistance**
Ask me anything about innovation, technology, or African entrepreneurship!

**Pro Tip:** Use specific descriptions for more accurate analysis!";

const STAKEHOLDER_STRATEGY: &str = "**Engagement Strategy:**
1. **Corporate Partners:** Approach for funding and market access
2. **Investors:** Pitch for seed funding and scaling support  
3. **Tech Companies:** Collaborate on technical implementation
4. **Government:** Seek regulatory support and public partnerships

*Based on AI analysis of project requirements and partner capabilities*";

const SOLUTION_NEXT_STEPS: &str = "🎯 **Next Steps:**
1. Conduct market validation
2. Develop MVP prototype
3. Identify pilot partners
4. Create implementation roadmap";

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Assembles display text for each kind of reply
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn welcome() -> String {
        WELCOME.to_string()
    }

    pub fn greeting<R: Rng + ?Sized>(rng: &mut R) -> String {
        pick(rng, GREETINGS).to_string()
    }

    pub fn analysis(analysis: &Analysis) -> String {
        format!(
            "🎯 **AI Analysis Results for:** \"{idea}\"

📊 **Category:** {category}
🤖 **AI Potential:** {ai}%
📈 **Scalability:** {level} ({scale}%)
⏱️ **Timeline:** {timeline}
😊 **Sentiment:** {mood} ({sentiment}/100)

🔍 **Key Insights:**
{recommendations}

⚠️ **Potential Risks:**
{risks}

🤝 **Suggested Stakeholders:**
{stakeholders}

*Analysis confidence: 92%*",
            idea = analysis.idea,
            category = analysis.category,
            ai = analysis.ai_potential,
            level = analysis.scalability.level,
            scale = analysis.scalability.score,
            timeline = analysis.timeline,
            mood = analysis.sentiment.mood,
            sentiment = analysis.sentiment.score,
            recommendations = bullets(&analysis.recommendations),
            risks = bullets(&analysis.risks),
            stakeholders = bullets(&analysis.stakeholders),
        )
    }

    pub fn analysis_clarification() -> String {
        "I'd be happy to analyze an idea! Please specify the idea you'd like me to analyze. For example: 'analyze AI funding platform for African startups'".to_string()
    }

    pub fn analysis_failure() -> String {
        "I apologize, but I encountered an issue while analyzing your idea. Please try again with a different description.".to_string()
    }

    pub fn solution(challenge: &str, solution: &GeneratedIdea) -> String {
        format!(
            "💡 **AI-Generated Solution**

**Challenge:** {challenge}
**Solution:** {idea}

📋 **Implementation Details:**
• **Category:** {category}
• **Innovation Score:** {innovation}%
• **Feasibility:** {feasibility}%

{next_steps}

*This AI-generated solution has a {innovation}% innovation potential and {feasibility}% feasibility rating.*",
            challenge = challenge,
            idea = solution.idea,
            category = solution.category,
            innovation = solution.innovation_score,
            feasibility = solution.feasibility,
            next_steps = SOLUTION_NEXT_STEPS,
        )
    }

    pub fn solution_clarification() -> String {
        "I'd love to generate a solution! Please describe the challenge or opportunity. For example: 'generate solution for improving rural education'".to_string()
    }

    pub fn solution_failure() -> String {
        "I'm having trouble generating a solution right now. Please try again with a different challenge description.".to_string()
    }

    pub fn insight<R: Rng + ?Sized>(rng: &mut R) -> String {
        pick(rng, INSIGHTS).to_string()
    }

    pub fn stakeholders(idea: &str, stakeholders: &[String]) -> String {
        format!(
            "🤝 **Stakeholder Recommendations for:** \"{idea}\"

**Strategic Partners:**
{partners}

{strategy}",
            idea = idea,
            partners = bullets(stakeholders),
            strategy = STAKEHOLDER_STRATEGY,
        )
    }

    pub fn stakeholder_clarification() -> String {
        "I can help identify stakeholders! Please specify the idea or project. Example: 'stakeholders for renewable energy project'".to_string()
    }

    pub fn prediction<R: Rng + ?Sized>(rng: &mut R) -> String {
        pick(rng, PREDICTIONS).to_string()
    }

    pub fn help() -> String {
        HELP.to_string()
    }

    /// Reply for unclassified input. `context` is the text of the most recent
    /// turns, used to continue an earlier analysis or generation thread.
    pub fn general(input: &str, context: &str) -> String {
        if input.chars().count() < SHORT_INPUT_CHARS {
            return "I'd love to help! Could you provide more details about what you're looking for?".to_string();
        }

        if context.contains("analyze") || context.contains("analysis") {
            return "I notice we were discussing idea analysis. Would you like me to analyze another idea or provide more details about the previous analysis?".to_string();
        }

        if context.contains("generate") || context.contains("solution") {
            return "I see we've been generating solutions. Would you like to explore another challenge or refine the previous solution?".to_string();
        }

        format!(
            "I understand you're asking about \"{input}\". 

As your AI assistant, I specialize in:
• Analyzing innovation ideas and their potential
• Generating AI-powered solutions to challenges  
• Providing strategic insights and market intelligence
• Identifying stakeholders and partners
• Predicting success probabilities

Would you like me to analyze this as an idea, generate a solution, or provide specific insights?

*Try: \"analyze {input}\" or \"generate solution for {input}\"*",
            input = input
        )
    }

    pub fn voice_unsupported() -> String {
        "Voice recognition is not supported in your browser.".to_string()
    }

    pub fn apology() -> String {
        "I apologize, but I'm experiencing technical difficulties. Please try again.".to_string()
    }
}

//! The standard healthcare leadership questionnaire.

use once_cell::sync::Lazy;

use super::{CompetencyDomain::*, ContentCatalog};

static STANDARD: Lazy<ContentCatalog> = Lazy::new(|| {
    ContentCatalog::builder()
        // Emotional Intelligence
        .competency(EmotionalIntelligence, "Self-awareness: Ability to recognize your emotions, strengths, weaknesses, values, and impact on others")
        .competency(EmotionalIntelligence, "Self-management: Ability to regulate emotions, demonstrate adaptability, and maintain a positive outlook")
        .competency(EmotionalIntelligence, "Social awareness: Ability to recognize others' emotions and organizational dynamics")
        .competency(EmotionalIntelligence, "Relationship management: Ability to influence, mentor, manage conflict, and foster teamwork")
        // Communication Excellence
        .competency(CommunicationExcellence, "Audience adaptation: Ability to adjust communication style and content for different stakeholders")
        .competency(CommunicationExcellence, "Active listening: Ability to fully concentrate, understand, respond, and remember what others communicate")
        .competency(CommunicationExcellence, "Conflict resolution: Ability to facilitate productive resolution of disagreements")
        .competency(CommunicationExcellence, "Crisis communication: Ability to communicate effectively under pressure")
        .competency(CommunicationExcellence, "Team communication: Ability to foster open, transparent communication within teams")
        // Patient-Centered Leadership
        .competency(PatientCenteredLeadership, "Patient journey understanding: Comprehension of the full spectrum of patient experiences")
        .competency(PatientCenteredLeadership, "Empathy-efficiency balance: Ability to maintain compassionate care while meeting operational requirements")
        .competency(PatientCenteredLeadership, "Accountability systems: Ability to establish clear expectations and foster a culture of responsibility")
        // Strategic Decision-Making
        .competency(StrategicDecisionMaking, "Workload management: Ability to allocate resources effectively across competing priorities")
        .competency(StrategicDecisionMaking, "Strategic thinking: Ability to consider long-term implications and align decisions with organizational vision")
        .competency(StrategicDecisionMaking, "Data analysis: Ability to interpret quantitative and qualitative information to inform decisions")
        .competency(StrategicDecisionMaking, "Problem-solving: Ability to identify root causes and implement effective solutions")
        .open_question(EmotionalIntelligence, "Describe a recent situation where you successfully managed your emotions in a challenging leadership scenario. What strategies did you use?")
        .open_question(EmotionalIntelligence, "In what situations do you find it most difficult to maintain emotional self-regulation? What triggers these challenges?")
        .open_question(EmotionalIntelligence, "How do you currently build and maintain relationships with team members? What approaches have been most successful?")
        .open_question(CommunicationExcellence, "What communication approaches do you currently use to adapt your message to different audiences (e.g., frontline staff, executives, patients)?")
        .open_question(CommunicationExcellence, "Describe your typical approach when faced with team conflict. What works well, and what could be improved?")
        .open_question(CommunicationExcellence, "How do you ensure important information flows effectively within your team or department?")
        .open_question(PatientCenteredLeadership, "How do you currently incorporate patient perspectives into your leadership decisions?")
        .open_question(PatientCenteredLeadership, "Describe how you balance empathy with operational efficiency in your daily leadership practice.")
        .open_question(PatientCenteredLeadership, "What accountability mechanisms have you implemented or experienced that effectively support patient-centered care?")
        .open_question(StrategicDecisionMaking, "How do you typically approach complex problems in your healthcare setting?")
        .open_question(StrategicDecisionMaking, "What data sources do you currently use to inform your leadership decisions?")
        .open_question(StrategicDecisionMaking, "Describe a recent strategic decision you made. What factors did you consider, and how did you evaluate success?")
        .reflection_question("Identify your top three leadership strengths across the four domains.")
        .reflection_question("Identify three specific areas where you see the greatest opportunity for development.")
        .reflection_question("For each development opportunity, describe why growth in this area matters to your leadership effectiveness.")
        .reflection_question("What specific aspects of this course could help address these development needs?")
        .reflection_question("What would success look like if you improved in these areas?")
        .build()
});

impl ContentCatalog {
    /// The process-wide standard questionnaire.
    pub fn standard() -> &'static ContentCatalog {
        &STANDARD
    }
}

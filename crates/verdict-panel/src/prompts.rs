//! Role instructions and per-phase prompt templates.

use verdict_core::Task;

use crate::personas::Persona;

/// Fixed instruction attached to every evaluation task.
pub const TASK_INSTRUCTIONS: &str = "Evaluate the hackathon project. First, do some research on \
     the information related to the project, then each judge should give a \
     score accordingly. Finally, list the opinions from each judge while \
     preserving the judge's unique identity, along with the score and \
     judge name, and also give a final summary of the opinions.";

pub const RESEARCHER_NAME: &str = "Researcher Practicante (Helper)";

pub const RESEARCHER_REGISTRATION: &str = "Researcher Practicante (Helper), a researcher who does \
     online searches to find the latest innovations and trends on AI and Open Sourced projects.";

pub const RESEARCHER_INSTRUCTIONS: &str = "You are a researcher who does research on AI and Open \
     Sourced projects. You use web search to stay updated on the latest innovations and trends.";

pub const COORDINATOR_NAME: &str = "Coordinator";

pub const COORDINATOR_INSTRUCTIONS: &str = "You coordinate a hackathon judging panel. Given the \
     feedback each judge produced, you write a short final summary that weighs their opinions \
     against each other. You never invent a score a judge did not give.";

/// Builds a judge's role instructions from its persona. The example feedback
/// is a style anchor, and the score format is pinned to "X/4".
pub fn judge_instructions(persona: &Persona) -> String {
    format!(
        "You are a judge in a hackathon.\n\
         This is your persona that you MUST act with: {}\n\
         Here is an example feedback that you might give with your persona, \
         you MUST try your best to align with this:\n{}\n\
         When evaluating projects, you must use the following criteria:\n{}\n\
         You also need to give scores based on these criteria, from 1-4. \
         The score given should be like 3/4, 2/4, etc.",
        persona.description, persona.example_feedback, persona.rubric
    )
}

pub fn research_prompt(task: &Task) -> String {
    format!(
        "{}\n\n{}\n\nGather current context on the technologies, the market and \
         comparable projects mentioned above, then report your findings.",
        task.content, task.additional_info
    )
}

pub fn judge_prompt(task: &Task, findings: Option<&str>) -> String {
    let findings = findings.unwrap_or("No research findings were available for this project.");
    format!(
        "{}\n\n{}\n\nResearch findings:\n{}\n\nGive your feedback and score now.",
        task.content, task.additional_info, findings
    )
}

pub fn summary_prompt(report: &str) -> String {
    format!(
        "Here is the feedback each judge gave:\n\n{report}\n\
         Write a final summary paragraph of the judges' opinions, preserving \
         each judge's point of view."
    )
}

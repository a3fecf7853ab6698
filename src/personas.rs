//! The fixed persona roster for the travel-planning chat.
//!
//! Personas are static configuration: a name plus instruction text, immutable
//! for the process lifetime. The concierge doubles as the fallback speaker
//! whenever the selection policy produces no usable name.

pub const CONCIERGE_NAME: &str = "Concierge";
const CONCIERGE_INSTRUCTIONS: &str = "\
You are a concierge for a travel agency specializing in hiking trips in Kyrgyzstan.
Your goal is to assist users in planning their hiking trips by coordinating with experts in route planning and local traditions.
Your role is to facilitate the conversation and ensure all participants contribute to the travel plan.
Whenever the user greets or thank you, feel free to answer without invoking other agents.
";

pub const ROUTE_EXPERT_NAME: &str = "KyrgyzstanRouteExpert";
const ROUTE_EXPERT_INSTRUCTIONS: &str = "\
You are an expert in hiking routes in Kyrgyzstan.
Your goal is to provide detailed information on the best hiking routes in Kyrgyzstan.
Highlight the difficulty levels, scenic spots, and any important landmarks.
";

pub const TRADITIONS_EXPERT_NAME: &str = "LocalTraditionsExpert";
const TRADITIONS_EXPERT_INSTRUCTIONS: &str = "\
You are an expert in the local traditions and culture of Kyrgyzstan.
Your goal is to provide insights on local customs and traditions that hikers should be aware of.
Emphasize respectful behavior, cultural norms, and any important local practices.
";

/// A named agent role with fixed static instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    pub name: &'static str,
    pub instructions: &'static str,
}

/// The fixed set of personas taking part in a session.
#[derive(Debug, Clone)]
pub struct Roster {
    personas: Vec<Persona>,
}

impl Roster {
    /// The three travel-planning personas, concierge first.
    pub fn travel_planning() -> Roster {
        Roster {
            personas: vec![
                Persona {
                    name: CONCIERGE_NAME,
                    instructions: CONCIERGE_INSTRUCTIONS,
                },
                Persona {
                    name: ROUTE_EXPERT_NAME,
                    instructions: ROUTE_EXPERT_INSTRUCTIONS,
                },
                Persona {
                    name: TRADITIONS_EXPERT_NAME,
                    instructions: TRADITIONS_EXPERT_INSTRUCTIONS,
                },
            ],
        }
    }

    /// Look a persona up by name, case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Persona> {
        let name = name.trim();
        self.personas
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The fallback persona (the concierge).
    pub fn fallback(&self) -> &Persona {
        &self.personas[0]
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.personas.iter().map(|p| p.name).collect()
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }
}

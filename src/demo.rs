use crate::{CardInfo, QuizQuestion};

fn card(name: &str, mana_cost: &str, text: &str, ruling: &str) -> CardInfo {
    CardInfo {
        name: name.to_string(),
        mana_cost: mana_cost.to_string(),
        text: text.to_string(),
        ruling: ruling.to_string(),
    }
}

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Built-in questions used when no dataset file is supplied.
pub fn demo_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            card: card(
                "Windstep Acolyte",
                "{1}{W}",
                "Flying\nWhenever you cast a noncreature spell, Windstep Acolyte gets +1/+1 until end of turn.",
                "The ability resolves before the spell that caused it to trigger.",
            ),
            question: "You cast an instant while Windstep Acolyte is blocking. When does it get +1/+1?".to_string(),
            options: options(&[
                "After the instant resolves",
                "Before the instant resolves",
                "At the beginning of the next end step",
                "Only if the instant targets it",
            ]),
            correct_answer_index: 1,
            explanation: "The trigger goes on the stack above the instant, so it resolves first.".to_string(),
        },
        QuizQuestion {
            card: card(
                "Tidebender Prodigy",
                "{2}{U}",
                "When Tidebender Prodigy enters, return up to one target nonland permanent to its owner's hand.",
                "\"Up to one\" means you may choose zero targets.",
            ),
            question: "Can Tidebender Prodigy enter if there are no other nonland permanents?".to_string(),
            options: options(&[
                "Yes, choosing no target",
                "No, the ability must have a target",
                "Only if you return a land instead",
            ]),
            correct_answer_index: 0,
            explanation: "With \"up to one\" the ability can be put on the stack without any targets.".to_string(),
        },
        QuizQuestion {
            card: card(
                "Emberfist Brawler",
                "{R}{R}",
                "Haste\nEmberfist Brawler can't block.",
                "Haste allows a creature to attack the turn it comes under your control.",
            ),
            question: "Can Emberfist Brawler attack the turn you cast it?".to_string(),
            options: options(&[
                "No, it has summoning sickness",
                "Only if you control another creature",
                "Yes, because it has haste",
                "Only during an extra combat",
            ]),
            correct_answer_index: 2,
            explanation: "Haste removes the restriction on attacking the turn it came under your control.".to_string(),
        },
        QuizQuestion {
            card: card(
                "Rootbound Sentinel",
                "{3}{G}",
                "Reach\nRootbound Sentinel enters with a +1/+1 counter on it for each land you control.",
                "Lands are counted as Rootbound Sentinel enters, not when it was cast.",
            ),
            question: "You control four lands, cast Rootbound Sentinel, and a land is destroyed in response. How many counters does it enter with?".to_string(),
            options: options(&["Four", "Three", "Zero"]),
            correct_answer_index: 1,
            explanation: "The number of lands is checked only as it enters the battlefield.".to_string(),
        },
        QuizQuestion {
            card: card(
                "Gloomveil Reaper",
                "{X}{B}",
                "Gloomveil Reaper enters with X +1/+1 counters on it.",
                "On the battlefield, X is 0 for mana value calculations.",
            ),
            question: "What is Gloomveil Reaper's mana value on the battlefield if X was 3?".to_string(),
            options: options(&["1", "4", "3", "0"]),
            correct_answer_index: 0,
            explanation: "X is treated as 0 everywhere except the stack, so only {B} counts.".to_string(),
        },
    ]
}

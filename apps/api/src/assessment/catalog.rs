//! Static tables: the 12-question RIASEC catalog, the career map and the
//! summary blurbs. All of it is `'static` and never mutated.

use serde::Serialize;

use crate::models::assessment::{QuestionOptions, QuestionView};

/// RIASEC trait codes. Declaration order is the canonical order
/// and drives both `Ord` and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl Category {
    pub const CANONICAL: [Category; 6] = [
        Category::R,
        Category::I,
        Category::A,
        Category::S,
        Category::E,
        Category::C,
    ];

    /// Career titles, most representative first. Only the first three are suggested.
    pub fn careers(self) -> &'static [&'static str] {
        match self {
            Category::R => &[
                "Mechanical Engineer",
                "Electrician",
                "Carpenter",
                "Automotive Technician",
            ],
            Category::I => &[
                "Data Scientist",
                "Research Analyst",
                "Software Developer",
                "Biologist",
            ],
            Category::A => &["Graphic Designer", "Writer", "Musician", "UX Designer"],
            Category::S => &["Teacher", "Nurse", "Social Worker", "Therapist"],
            Category::E => &[
                "Marketing Manager",
                "Sales Representative",
                "Entrepreneur",
                "Product Manager",
            ],
            Category::C => &[
                "Accountant",
                "Operations Coordinator",
                "Data Entry Specialist",
                "Admin Assistant",
            ],
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Category::R => "Hands-on, practical, and mechanical. You enjoy building, fixing, and working with tools.",
            Category::I => "Analytical and curious. You enjoy research, problem-solving, and understanding how things work.",
            Category::A => "Creative and expressive. You value originality and enjoy artistic or design-focused tasks.",
            Category::S => "Supportive and people-oriented. You find meaning in helping and teaching others.",
            Category::E => "Persuasive and leadership-driven. You thrive in business, sales, and leading initiatives.",
            Category::C => "Organized and detail-focused. You keep systems running smoothly and accurately.",
        }
    }
}

/// An answer choice. "A" affirms the question's trait; "B" does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// Exact match only: lowercase or padded values are not choices.
    pub fn parse(raw: &str) -> Option<Choice> {
        match raw {
            "A" => Some(Choice::A),
            "B" => Some(Choice::B),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Question {
    pub id: i64,
    pub text: &'static str,
    pub choice_a: &'static str,
    pub choice_b: &'static str,
    pub category: Category,
}

const fn agree_disagree(id: i64, text: &'static str, category: Category) -> Question {
    Question {
        id,
        text,
        choice_a: "Agree",
        choice_b: "Disagree",
        category,
    }
}

/// Two questions per category, ids 1..=12 in ascending order.
pub static QUESTIONS: [Question; 12] = [
    agree_disagree(1, "I enjoy building or fixing things with my hands.", Category::R),
    agree_disagree(2, "I like working with tools or machines.", Category::R),
    agree_disagree(3, "I enjoy solving math or science problems.", Category::I),
    agree_disagree(4, "I like analyzing data and figuring out how things work.", Category::I),
    agree_disagree(5, "I like to create art, music, or write.", Category::A),
    agree_disagree(6, "I prefer unstructured tasks where I can be original.", Category::A),
    agree_disagree(7, "I enjoy helping people and improving their lives.", Category::S),
    agree_disagree(8, "I like teaching, counseling, or caring roles.", Category::S),
    agree_disagree(9, "I like leading projects and persuading others.", Category::E),
    agree_disagree(10, "I enjoy business, sales, or entrepreneurship.", Category::E),
    agree_disagree(11, "I prefer organizing information and keeping things orderly.", Category::C),
    agree_disagree(12, "I enjoy working with data, records, and details.", Category::C),
];

pub fn find_question(id: i64) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Client-facing catalog. The category tag stays server-side.
pub fn list_questions() -> Vec<QuestionView> {
    QUESTIONS
        .iter()
        .map(|q| QuestionView {
            id: q.id,
            text: q.text,
            options: QuestionOptions {
                a: q.choice_a,
                b: q.choice_b,
            },
        })
        .collect()
}

//! Static copy for the landing page sections and the problem statements page.
//!
//! Section ids double as navbar anchor ids and must stay unique.

pub const EVENT_NAME: &str = "GCEE Hackathon";
pub const HOST_INSTITUTION: &str = "Government College of Engineering, Erode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

/// Landing page sections, top to bottom.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", title: "Home" },
    Section { id: "about", title: "About" },
    Section { id: "contribute", title: "Contribute" },
    Section { id: "guidelines", title: "Guidelines" },
    Section { id: "timeline", title: "Timeline" },
    Section { id: "video", title: "Watch" },
    Section { id: "footer", title: "Contact" },
];

pub const ABOUT: &str = "A 24-hour build sprint where student teams take on real problems \
from industry and the community. Bring an idea, find a team, ship a prototype.";

pub const CONTRIBUTE_STEPS: &[&str] = &[
    "Pick a problem statement or propose your own.",
    "Form a team of two to four members.",
    "Register the team before the deadline.",
    "Build, commit often, and demo on the final day.",
];

pub const GUIDELINES: &[&str] = &[
    "All code must be written during the event.",
    "Open-source libraries and public APIs are allowed.",
    "Each team presents a working demo in under five minutes.",
    "Judging weighs impact, execution, and presentation equally.",
    "Be respectful. The code of conduct applies to every channel.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub when: &'static str,
    pub what: &'static str,
}

pub const TIMELINE: &[Milestone] = &[
    Milestone { when: "Week 1", what: "Registrations open" },
    Milestone { when: "Week 3", what: "Problem statements released" },
    Milestone { when: "Week 5", what: "Registrations close" },
    Milestone { when: "Day 1, 09:00", what: "Hacking begins" },
    Milestone { when: "Day 2, 09:00", what: "Code freeze" },
    Milestone { when: "Day 2, 14:00", what: "Demos and results" },
];

pub const VIDEO_TITLE: &str = "Event teaser";
pub const VIDEO_URL: &str = "https://www.youtube.com/";

pub const FOOTER_LINES: &[&str] = &[
    HOST_INSTITUTION,
    "Organized by the student developer community.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemStatement {
    pub code: &'static str,
    pub title: &'static str,
    pub domain: &'static str,
    pub summary: &'static str,
}

pub const PROBLEM_STATEMENTS: &[ProblemStatement] = &[
    ProblemStatement {
        code: "PS01",
        title: "Campus lost and found",
        domain: "Web",
        summary: "Match reported lost items with found items and notify owners.",
    },
    ProblemStatement {
        code: "PS02",
        title: "Crop disease triage",
        domain: "Agriculture / ML",
        summary: "Flag likely leaf diseases from a phone photo and suggest next steps.",
    },
    ProblemStatement {
        code: "PS03",
        title: "Bus arrival estimates",
        domain: "Mobility",
        summary: "Predict arrival times for college buses from sparse GPS pings.",
    },
    ProblemStatement {
        code: "PS04",
        title: "Open innovation",
        domain: "Any",
        summary: "Bring your own problem with a clear user and a measurable outcome.",
    },
];

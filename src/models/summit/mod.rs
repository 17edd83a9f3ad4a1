//! Display copy for the summit page.
//!
//! Everything here is static content. The countdown targets live in
//! [`crate::models::settings`] so they can be overridden; the schedule below
//! is the human-readable agenda and is not used for any arithmetic.

/// Emoji used as a lightweight icon next to headings and stats.
pub type Icon = &'static str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

/// Titled blurb used for achievements and venue features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    pub alias: &'static str,
    pub tagline: &'static str,
    pub bio: Vec<&'static str>,
    pub stats: Vec<Stat>,
    pub achievements: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub name: &'static str,
    pub campus: &'static str,
    pub features: Vec<Highlight>,
    pub map_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub icon: Icon,
    pub title: &'static str,
    pub when: &'static str,
    /// Rendered with a glow, e.g. gate opening time.
    pub highlight: bool,
}

/// One step of the registration walkthrough. `link` is rendered inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationStep {
    pub text: &'static str,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinator {
    pub name: &'static str,
    pub phone: Option<&'static str>,
}

impl Coordinator {
    /// `tel:` link for the phone number, when there is one.
    pub fn phone_link(&self) -> Option<String> {
        self.phone
            .map(|number| format!("tel:{}", number.replace(' ', "")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub club: &'static str,
    pub club_tagline: &'static str,
    pub socials: Vec<Link>,
    pub student_coordinators: Vec<Coordinator>,
    pub faculty_coordinators: Vec<Coordinator>,
    pub copyright: &'static str,
    pub office: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: &'static str,
    pub pitch: &'static str,
    pub badge: &'static str,
    pub button: &'static str,
    pub footnote: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummitPage {
    pub club_link: Link,
    pub partner_link: Link,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub venue_line: &'static str,
    pub date_line: &'static str,
    pub time_line: &'static str,
    pub speaker: Speaker,
    pub venue: Venue,
    pub timeline_heading: &'static str,
    pub timeline_pitch: &'static str,
    pub schedule: Vec<ScheduleEntry>,
    pub registration_heading: &'static str,
    pub registration_pitch: &'static str,
    /// Only present when a hosting URL is configured
    pub guide_video: Option<Link>,
    pub registration_steps: Vec<RegistrationStep>,
    pub cta: CallToAction,
    pub footer: Footer,
}

impl SummitPage {
    /// The Nexus Forum Tech Summit at VIT Chennai.
    pub fn nexus_forum(registration_url: &str, guide_video_url: Option<&str>) -> Self {
        Self {
            club_link: Link {
                label: "NEXUS",
                url: "https://nexus-website-gamma.vercel.app".to_string(),
                icon: "◆",
            },
            partner_link: Link {
                label: "TAKE U FORWARD",
                url: "https://takeuforward.org".to_string(),
                icon: "👑",
            },
            title: "STRIVER",
            subtitle: "Nexus Forum",
            tagline: "TECH SUMMIT",
            venue_line: "MG Auditorium, VIT Chennai",
            date_line: "September 19, 2025",
            time_line: "2:00PM - 6:00PM",
            speaker: Speaker {
                name: "Raj Vikramaditya",
                alias: "Striver",
                tagline: "MEET THE LEGEND",
                bio: vec![
                    "Raj Vikramaditya, globally known as Striver, is a Senior Software Engineer at Google \
                     and the visionary founder of takeUforward, India's leading coding education platform.",
                    "With over 2.5 million subscribers on YouTube and 1 million+ students trained, he has \
                     revolutionized how aspiring developers approach Data Structures and Algorithms.",
                    "His structured approach to problem-solving and comprehensive curriculum has helped \
                     thousands of students land jobs at top tech companies including Google, Microsoft, \
                     Amazon, and Meta.",
                ],
                stats: vec![
                    Stat { icon: "▶", value: "2.5M+", label: "YouTube Subscribers" },
                    Stat { icon: "👥", value: "1M+", label: "Students Trained" },
                    Stat { icon: "🏅", value: "Google", label: "Senior SDE" },
                    Stat { icon: "📖", value: "takeUforward", label: "Founder & CEO" },
                ],
                achievements: vec![
                    Highlight {
                        icon: "📈",
                        title: "Industry Impact",
                        description: "Transformed coding education in India with structured learning paths",
                    },
                    Highlight {
                        icon: "⭐",
                        title: "Recognition",
                        description: "Featured in top tech publications and coding communities worldwide",
                    },
                    Highlight {
                        icon: "👥",
                        title: "Community",
                        description: "Built one of the largest coding communities with active mentorship",
                    },
                ],
            },
            venue: Venue {
                name: "MG Auditorium",
                campus: "VIT Chennai",
                features: vec![
                    Highlight {
                        icon: "📍",
                        title: "Location",
                        description: "VIT Chennai Campus, Main Block",
                    },
                    Highlight {
                        icon: "👥",
                        title: "Capacity",
                        description: "500+ Seats with Premium Audio-Visual Setup",
                    },
                    Highlight {
                        icon: "⭐",
                        title: "Facilities",
                        description: "Air Conditioning, Comfortable Seating",
                    },
                ],
                map_url: "https://www.google.com/maps?q=VIT+Chennai".to_string(),
            },
            timeline_heading: "EVENT TIMELINE",
            timeline_pitch: "Mark your calendars and secure your spot!",
            schedule: vec![
                ScheduleEntry {
                    icon: "📅",
                    title: "Registration Opens",
                    when: "September 8, 2025 - 10:00 AM",
                    highlight: false,
                },
                ScheduleEntry {
                    icon: "🕑",
                    title: "Registration Deadline",
                    when: "September 18, 2025 - 11:59 PM",
                    highlight: false,
                },
                ScheduleEntry {
                    icon: "⭐",
                    title: "Event Day",
                    when: "September 19, 2025 - 2:00 PM",
                    highlight: false,
                },
                ScheduleEntry {
                    icon: "⏰",
                    title: "Entry Starts",
                    when: "September 19, 2025 - 12:30 PM",
                    highlight: true,
                },
            ],
            registration_heading: "HOW TO REGISTER",
            registration_pitch: "Follow these simple steps to secure your spot",
            guide_video: guide_video_url.map(|url| Link {
                label: "Watch the registration guide",
                url: url.to_string(),
                icon: "🎬",
            }),
            registration_steps: vec![
                RegistrationStep {
                    text: "Login to",
                    link: Some(Link {
                        label: "eventhubcc.vit.ac.in/EventHub",
                        url: registration_url.to_string(),
                        icon: "🌐",
                    }),
                },
                RegistrationStep { text: "In the search bar select Summit", link: None },
                RegistrationStep { text: "Go to NexusForum (Free Registration)", link: None },
                RegistrationStep { text: "Click on Register.", link: None },
                RegistrationStep { text: "All Set!!", link: None },
            ],
            cta: CallToAction {
                heading: "SECURE YOUR SPOT",
                pitch: "Join hundreds of aspiring developers for this exclusive opportunity",
                badge: "100% FREE",
                button: "REGISTER NOW",
                footnote: "Limited seats available",
            },
            footer: Footer {
                club: "NEXUS",
                club_tagline: "VIT Chennai's Premier Backend Club",
                socials: vec![
                    Link { label: "YouTube", url: "https://www.youtube.com/@NEXUS-n4y".to_string(), icon: "▶" },
                    Link { label: "Website", url: "https://nexus-website-gamma.vercel.app".to_string(), icon: "🌐" },
                    Link { label: "GitHub", url: "https://github.com/Nexus-VITC".to_string(), icon: "</>" },
                ],
                student_coordinators: vec![
                    Coordinator { name: "Pratik", phone: Some("+91 85956 73484") },
                    Coordinator { name: "Aditya", phone: Some("+91 97294 70642") },
                ],
                faculty_coordinators: vec![
                    Coordinator { name: "Dr. Lekshmi K", phone: None },
                    Coordinator { name: "Dr. Pavithra S", phone: None },
                ],
                copyright: "© 2025 NEXUS - VIT Chennai. All rights reserved.",
                office: "Office of Student Welfare",
            },
        }
    }

    /// Every outbound link on the page, for link checks.
    pub fn links(&self) -> Vec<&Link> {
        let mut links = vec![&self.club_link, &self.partner_link];
        links.extend(self.guide_video.as_ref());
        links.extend(
            self.registration_steps
                .iter()
                .filter_map(|step| step.link.as_ref()),
        );
        links.extend(self.footer.socials.iter());
        links
    }
}

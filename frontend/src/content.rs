//! Copy and link tables rendered by the landing page.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub figure: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 2] = [
    Stat { figure: "1000+", label: "Visionaries United" },
    Stat { figure: "80+", label: "Stories Minted" },
];

pub const ADVANTAGES: [&str; 5] = [
    "Deep understanding of African tech landscape",
    "Community-first approach to development",
    "Community-driven development",
    "Real-world problem solving",
    "DAO-Driven Governance & Funding",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Value {
    pub title: &'static str,
    pub blurb: &'static str,
    /// SVG path drawn in a 24x24 stroked icon.
    pub icon: &'static str,
}

pub const VALUES: [Value; 3] = [
    Value {
        title: "Innovation",
        blurb: "Pushing the boundaries of what's possible with blockchain technology",
        icon: "M13 10V3L4 14h7v7l9-11h-7z",
    },
    Value {
        title: "Community",
        blurb: "Building a supportive ecosystem for developers and entrepreneurs",
        icon: "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
    },
    Value {
        title: "Education",
        blurb: "Empowering the next generation with Web3 knowledge and skills",
        icon: "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner { name: "Borderless", logo: "partners/borderless.png" },
    Partner { name: "Lisk", logo: "partners/lisk.png" },
    Partner { name: "Streamlivr", logo: "partners/streamlivr.png" },
    Partner { name: "Google Developer Groups", logo: "partners/gdg.png" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub url: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Let's Build DAO",
        summary: "Africa’s first On-Chain Intelligence Hub, designed to drive real blockchain adoption by collecting, analyzing, and leveraging on-chain transaction data.",
        image: "projects/lets-build-dao.png",
        image_alt: "Let's Build DAO",
        url: "https://letsbuilddao.org",
    },
    Project {
        title: "Let's Build Academy",
        summary: "A self-learning platform offering Web3 courses in development, design, and blockchain writing.",
        image: "projects/academy.png",
        image_alt: "Let's Build Academy",
        url: "https://academy.letsbuilddao.org",
    },
    Project {
        title: "Hackathons, Meetups & Bootcamps",
        summary: "Connecting Enthusiasts, students, builders, investors, and innovators to bring impactful Web3 projects to life.",
        image: "projects/events.jpg",
        image_alt: "Events",
        url: "https://meetup.letsbuilddao.org",
    },
    Project {
        title: "Lazy NFT's",
        summary: "The gateway of the Let's Build DAO ecosystem — where your NFT is more than just art. It's your all-access pass to the new economy of skills, community, and power.",
        image: "projects/nfts.jpg",
        image_alt: "Lazy NFTs",
        url: "https://lazy.letsbuilddao.org",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Social {
    LinkedIn,
    X,
    GitHub,
}

impl Social {
    pub fn label(self) -> &'static str {
        match self {
            Social::LinkedIn => "LinkedIn",
            Social::X => "X",
            Social::GitHub => "GitHub",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Member {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: Option<&'static str>,
    pub links: &'static [(Social, &'static str)],
}

pub const TEAM: [Member; 8] = [
    Member {
        name: "Great Adams",
        initials: "GA",
        role: Some("Team Lead"),
        links: &[
            (Social::LinkedIn, "https://www.linkedin.com/in/great-adams-606b22187/"),
            (Social::X, "https://x.com/greatAdams01"),
        ],
    },
    Member {
        name: "Alabo Excel",
        initials: "AE",
        role: Some("Development Team Lead"),
        links: &[
            (Social::LinkedIn, "https://www.linkedin.com/in/alabo-excel/"),
            (Social::GitHub, "https://github.com/alabo-excel"),
        ],
    },
    Member {
        name: "Bibi Victoria",
        initials: "BV",
        role: Some("Human Resource Manager"),
        links: &[(Social::LinkedIn, "https://www.linkedin.com/in/victoria-bibi-a4497a221/")],
    },
    Member {
        name: "Jerry Chukwundah",
        initials: "JC",
        role: Some("Product Manager"),
        links: &[
            (Social::LinkedIn, "https://www.linkedin.com/in/jeremiah-chukundah-19bbb81b5/"),
            (Social::X, "https://x.com/jerrychukundah"),
        ],
    },
    Member {
        name: "Natachi Nnamaka",
        initials: "NN",
        role: Some("Academy Lead"),
        links: &[
            (Social::LinkedIn, "https://www.linkedin.com/in/natachijs/"),
            (Social::X, "https://x.com/natachijs"),
        ],
    },
    Member {
        name: "Richard",
        initials: "RR",
        role: None,
        links: &[(Social::X, "https://x.com/IamChardDo")],
    },
    Member {
        name: "Joseph Bassey",
        initials: "JB",
        role: Some("Community Management Lead"),
        links: &[(Social::X, "https://x.com/josephbassey21")],
    },
    Member {
        name: "Chisaneme Aloni",
        initials: "CO",
        role: Some("Marketing Lead"),
        links: &[
            (Social::LinkedIn, "https://www.linkedin.com/in/chisaneme-aloni/"),
            (Social::X, "https://x.com/aloni212"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const QUICK_LINKS: [Link; 3] = [
    Link { label: "DAO", href: "https://letsbuilddao.org/" },
    Link { label: "Academy", href: "https://academy.letsbuilddao.org/" },
    Link { label: "Lazy NFT", href: "https://lazy.letsbuilddao.org/" },
];

/// Footer social links; `href` paired with the icon file under `icons/`.
pub const SOCIALS: [(Link, &str); 5] = [
    (Link { label: "Facebook", href: "https://web.facebook.com/profile.php?id=61575270601827" }, "icons/001.svg"),
    (Link { label: "X", href: "https://x.com/letsbuild_dao" }, "icons/002.svg"),
    (Link { label: "Telegram", href: "https://t.me/letsbuilddaocommunity" }, "icons/003.svg"),
    (Link { label: "Instagram", href: "https://www.instagram.com/letsbuilddao/" }, "icons/004.svg"),
    (Link { label: "LinkedIn", href: "https://www.linkedin.com/in/let-s-build-labs-208b52296/" }, "icons/005.svg"),
];

pub const NAV_LINKS: [Link; 4] = [
    Link { label: "About", href: "#about" },
    Link { label: "Projects", href: "#projects" },
    Link { label: "Team", href: "#team" },
    Link { label: "Contact", href: "#contact" },
];

pub const LOADING_LINES: [&str; 11] = [
    "Preparing Africa's Web3 revolution...",
    "Building tomorrow's digital Africa...",
    "Connecting the continent to Web3...",
    "Crafting Africa's blockchain future...",
    "Empowering African developers...",
    "Unleashing Web3 across Africa...",
    "Loading African innovation...",
    "Bridging Africa to decentralization...",
    "Awakening the digital lion...",
    "Igniting Africa's tech renaissance...",
    "Preparing Africa's Web3 story...",
];

/// Maps a uniform sample in `[0, 1)` onto a loading line.
pub fn loading_line(sample: f64) -> &'static str {
    let last = LOADING_LINES.len() - 1;
    let index = (sample.clamp(0.0, 1.0) * LOADING_LINES.len() as f64) as usize;
    LOADING_LINES[index.min(last)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_line_covers_the_whole_table() {
        assert_eq!(loading_line(0.0), LOADING_LINES[0]);
        assert_eq!(loading_line(0.999_999), LOADING_LINES[10]);
        assert_eq!(loading_line(1.0), LOADING_LINES[10]);
        assert_eq!(loading_line(0.5), LOADING_LINES[5]);
    }

    #[test]
    fn team_initials_are_two_letters() {
        for member in TEAM {
            assert_eq!(member.initials.len(), 2, "{}", member.name);
            assert!(!member.links.is_empty(), "{}", member.name);
        }
    }

    #[test]
    fn outbound_links_are_absolute() {
        for project in PROJECTS {
            assert!(project.url.starts_with("https://"), "{}", project.title);
        }
        for (link, icon) in SOCIALS {
            assert!(link.href.starts_with("https://"), "{}", link.label);
            assert!(icon.ends_with(".svg"));
        }
    }

    #[test]
    fn nav_links_target_tracked_sections() {
        use crate::visibility::Section;
        for link in NAV_LINKS {
            let id = link.href.trim_start_matches('#');
            assert!(Section::ALL.iter().any(|s| s.id() == id), "{}", id);
        }
    }
}

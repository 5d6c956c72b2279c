//! Static rosters rendered by the content views.

use serde::Serialize;

use crate::route::ViewId;
use crate::tour::TourAnchor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelStats {
    pub height: &'static str,
    pub hair: &'static str,
    pub eyes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: u32,
    pub name: &'static str,
    pub image_url: &'static str,
    pub stats: ModelStats,
    pub specialties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgencyKind {
    Modeling,
    Movie,
    Music,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: u32,
    pub name: &'static str,
    pub logo_url: &'static str,
    pub location: &'static str,
    pub kind: AgencyKind,
    pub specialization: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CastingCall {
    pub id: u32,
    pub title: &'static str,
    pub production: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicVideoCastingCall {
    pub id: u32,
    pub artist: &'static str,
    pub song_title: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub shoot_date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicPromotion {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub platform: &'static str,
    pub image_url: &'static str,
    pub target_audience: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    View(ViewId),
    Group(&'static [NavChild]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChild {
    pub name: &'static str,
    pub view: ViewId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub target: NavTarget,
    pub is_primary: bool,
    pub tour_anchor: Option<TourAnchor>,
}

pub const MUSIC_LINKS: [NavChild; 2] = [
    NavChild {
        name: "Music Video Casting",
        view: ViewId::MusicVideoCasting,
    },
    NavChild {
        name: "Music Promoting",
        view: ViewId::MusicPromoting,
    },
];

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink {
        name: "Home",
        target: NavTarget::View(ViewId::Home),
        is_primary: false,
        tour_anchor: None,
    },
    NavLink {
        name: "Models",
        target: NavTarget::View(ViewId::Models),
        is_primary: false,
        tour_anchor: Some(TourAnchor::Models),
    },
    NavLink {
        name: "Modeling Agencies",
        target: NavTarget::View(ViewId::ModelingAgencies),
        is_primary: false,
        tour_anchor: Some(TourAnchor::ModelingAgencies),
    },
    NavLink {
        name: "Movie Agencies",
        target: NavTarget::View(ViewId::MovieAgencies),
        is_primary: false,
        tour_anchor: Some(TourAnchor::MovieAgencies),
    },
    NavLink {
        name: "Music",
        target: NavTarget::Group(&MUSIC_LINKS),
        is_primary: false,
        tour_anchor: Some(TourAnchor::Music),
    },
    NavLink {
        name: "Apply",
        target: NavTarget::View(ViewId::Apply),
        is_primary: true,
        tour_anchor: None,
    },
];

macro_rules! model {
    ($id:literal, $name:literal, $seed:literal, $height:literal, $hair:literal, $eyes:literal, [$($specialty:literal),*]) => {
        Model {
            id: $id,
            name: $name,
            image_url: concat!("https://picsum.photos/seed/", $seed, "/400/600"),
            stats: ModelStats {
                height: $height,
                hair: $hair,
                eyes: $eyes,
            },
            specialties: &[$($specialty),*],
        }
    };
}

pub const MODELS: [Model; 16] = [
    model!(1, "Anya Petrova", "AnyaPetrova", "5'11\"", "Blonde", "Blue", ["Runway", "Editorial", "High Fashion"]),
    model!(2, "Leo Chen", "LeoChen", "6'2\"", "Black", "Brown", ["Commercial", "Fitness", "Print"]),
    model!(3, "Sofia Rossi", "SofiaRossi", "5'9\"", "Brown", "Green", ["Beauty", "Lifestyle", "Commercial"]),
    model!(4, "Jabari Jones", "JabariJones", "6'1\"", "Black", "Brown", ["Athleisure", "Streetwear", "Fitness"]),
    model!(5, "Isabelle Dubois", "IsabelleDubois", "5'10\"", "Red", "Hazel", ["Alternative", "Editorial", "Avant-Garde"]),
    model!(6, "Kenji Tanaka", "KenjiTanaka", "5'11\"", "Black", "Brown", ["Streetwear", "Commercial", "E-commerce"]),
    model!(7, "Chloe Kim", "ChloeKim", "5'8\"", "Black", "Brown", ["Beauty", "Commercial", "Influencer"]),
    model!(8, "Mateo Garcia", "MateoGarcia", "6'0\"", "Brown", "Brown", ["Fitness", "Print", "Lifestyle"]),
    model!(9, "Freja Nielsen", "FrejaNielsen", "5'10\"", "Blonde", "Blue", ["Runway", "High Fashion", "Scandinavian"]),
    model!(10, "Adil Omar", "AdilOmar", "6'1\"", "Black", "Brown", ["Commercial", "Print", "Classic"]),
    model!(11, "Nia Adebayo", "NiaAdebayo", "5'9\"", "Black", "Brown", ["Beauty", "Editorial", "Plus Size"]),
    model!(12, "Liam Murphy", "LiamMurphy", "6'3\"", "Brown", "Blue", ["Fitness", "Athletic", "Runway"]),
    model!(13, "Alina Popescu", "AlinaPopescu", "5'8\"", "Brunette", "Green", ["Commercial", "Petite", "Lifestyle"]),
    model!(14, "Ravi Kumar", "RaviKumar", "6'0\"", "Black", "Brown", ["Print", "Commercial", "Influencer"]),
    model!(15, "Saskia van der Berg", "SaskiaVanDerBerg", "6'0\"", "Red", "Blue", ["Runway", "High Fashion", "Unique Look"]),
    model!(16, "Carlos Sanchez", "CarlosSanchez", "5'11\"", "Black", "Brown", ["Streetwear", "Alternative", "Tattoo"]),
];

pub const AGENCIES: [Agency; 6] = [
    Agency {
        id: 1,
        name: "Vogue",
        logo_url: "https://picsum.photos/seed/vogue-logo/200/200",
        location: "New York, USA",
        kind: AgencyKind::Modeling,
        specialization: "High Fashion & Runway",
    },
    Agency {
        id: 2,
        name: "Warner Bros. Discovery",
        logo_url: "https://picsum.photos/seed/wbd-logo/200/200",
        location: "New York, USA",
        kind: AgencyKind::Movie,
        specialization: "Major Film & Television Production",
    },
    Agency {
        id: 3,
        name: "Dolce and Gabbana",
        logo_url: "https://picsum.photos/seed/dng-logo/200/200",
        location: "Milan, Italy",
        kind: AgencyKind::Modeling,
        specialization: "Luxury Fashion",
    },
    Agency {
        id: 4,
        name: "Uni-versal Extras",
        logo_url: "https://picsum.photos/seed/universal-logo/200/200",
        location: "London, UK",
        kind: AgencyKind::Movie,
        specialization: "Background & Extra Casting for Film/TV",
    },
    Agency {
        id: 5,
        name: "Calvin Klein",
        logo_url: "https://picsum.photos/seed/ck-logo/200/200",
        location: "New York, USA",
        kind: AgencyKind::Modeling,
        specialization: "Minimalist & Commercial",
    },
    Agency {
        id: 6,
        name: "Central Casting",
        logo_url: "https://picsum.photos/seed/central-logo/200/200",
        location: "Burbank, USA",
        kind: AgencyKind::Movie,
        specialization: "Background Actors for Film, TV, and Commercials",
    },
];

pub const CASTING_CALLS: [CastingCall; 4] = [
    CastingCall {
        id: 1,
        title: "Project Titan",
        production: "Warner Bros. Discovery",
        role: "Lead Female - \"Zara\"",
        description: "A sci-fi epic seeking a strong female lead with athletic ability and emotional depth.",
        requirements: &["Age: 25-35", "Athletic build", "Prior acting experience required"],
    },
    CastingCall {
        id: 2,
        title: "Echoes of Yesterday",
        production: "Warner Bros. Discovery",
        role: "Supporting Male - \"Elias\"",
        description: "A period drama set in the 1920s. Seeking an actor with a classic look and theatrical training.",
        requirements: &["Age: 40-50", "Experience with period pieces", "Stage combat skills a plus"],
    },
    CastingCall {
        id: 3,
        title: "Neon Nights",
        production: "Indie Productions",
        role: "Various Background Roles",
        description: "Cyberpunk thriller needs background actors to populate a futuristic city.",
        requirements: &[
            "All ages and looks welcome",
            "Must be comfortable with night shoots",
            "Unique/alternative styles encouraged",
        ],
    },
    CastingCall {
        id: 4,
        title: "Summer Bloom",
        production: "Warner Bros. Discovery",
        role: "Lead Male - \"Alex\"",
        description: "A heartwarming romantic comedy about a city boy finding love in the countryside.",
        requirements: &["Age: 28-38", "Strong comedic timing", "Personable and charming"],
    },
];

pub const MUSIC_VIDEO_CASTING_CALLS: [MusicVideoCastingCall; 6] = [
    MusicVideoCastingCall {
        id: 1,
        artist: "Aurora Haze",
        song_title: "Electric Dreams",
        role: "Lead Dancer",
        description: "Seeking a contemporary dancer with expressive movement for a futuristic-themed music video.",
        requirements: &["Proficient in contemporary dance", "Unique look"],
        shoot_date: "Next Month",
    },
    MusicVideoCastingCall {
        id: 2,
        artist: "The Voids",
        song_title: "City Echoes",
        role: "Background Crowd",
        description: "Looking for a diverse group of people to be part of a concert scene in our new music video.",
        requirements: &["Energetic personality", "Available for a full day shoot"],
        shoot_date: "In Two Weeks",
    },
    MusicVideoCastingCall {
        id: 3,
        artist: "SOL",
        song_title: "Golden Hour",
        role: "Romantic Interest",
        description: "Male lead needed for a story-driven music video about a summer romance.",
        requirements: &["Natural on camera", "Comfortable with close-ups"],
        shoot_date: "End of Summer",
    },
    MusicVideoCastingCall {
        id: 4,
        artist: "Neon Bloom",
        song_title: "Midnight Drive",
        role: "Lead Actor/Actress",
        description: "A retro-futuristic video needs a charismatic lead to portray a story of love and loss in a neon-drenched city.",
        requirements: &["Strong acting skills", "Expressive face", "Comfortable with night shoots"],
        shoot_date: "Early Next Month",
    },
    MusicVideoCastingCall {
        id: 5,
        artist: "DJ Groovemaster",
        song_title: "Rhythm of the Sun",
        role: "Party Goers / Dancers",
        description: "High-energy dance track needs a large crowd for a beach party scene. Must be able to dance and have fun on camera.",
        requirements: &["Good rhythm", "High energy", "Beachwear required"],
        shoot_date: "This Weekend",
    },
    MusicVideoCastingCall {
        id: 6,
        artist: "Luna Spectral",
        song_title: "Whispering Woods",
        role: "Ethereal Figures",
        description: "An atmospheric, fantasy-themed video requires actors/dancers with a graceful, mysterious presence to portray forest spirits.",
        requirements: &["Graceful movement", "Experience with improv", "Unique/ethereal look"],
        shoot_date: "In Three Weeks",
    },
];

pub const MUSIC_PROMOTIONS: [MusicPromotion; 3] = [
    MusicPromotion {
        id: 1,
        title: "Spotify Playlist Placement",
        description: "Get your track featured on major independent Spotify playlists with millions of listeners.",
        platform: "Spotify",
        image_url: "https://picsum.photos/seed/promo1/600/400",
        target_audience: "Indie Pop, Chillwave",
    },
    MusicPromotion {
        id: 2,
        title: "TikTok Influencer Campaign",
        description: "Collaborate with music-focused TikTok influencers to create viral trends with your song.",
        platform: "TikTok",
        image_url: "https://picsum.photos/seed/promo2/600/400",
        target_audience: "Gen Z, Pop, Hip-hop",
    },
    MusicPromotion {
        id: 3,
        title: "Music Blog Premiere",
        description: "Secure an exclusive premiere for your new single or music video on a top-tier indie music blog.",
        platform: "Blogs",
        image_url: "https://picsum.photos/seed/promo3/600/400",
        target_audience: "Indie, Alternative, Rock",
    },
];

#[must_use]
pub fn model_by_id(id: u32) -> Option<&'static Model> {
    MODELS.iter().find(|model| model.id == id)
}

pub fn agencies_of(kind: AgencyKind) -> impl Iterator<Item = &'static Agency> {
    AGENCIES.iter().filter(move |agency| agency.kind == kind)
}

/// Models shown on the home page. Clicking one deep-links into the roster.
pub fn featured_models() -> impl Iterator<Item = &'static Model> {
    MODELS.iter()
}

/// Element id a roster card carries so deep links can scroll to it.
#[must_use]
pub fn model_anchor_id(id: u32) -> String {
    format!("model-{id}")
}

/// One line of the collapsed (hamburger) navigation. Groups flatten into a
/// heading followed by their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileMenuEntry {
    Heading(&'static str),
    Link {
        name: &'static str,
        view: ViewId,
        is_primary: bool,
        nested: bool,
    },
}

#[must_use]
pub fn mobile_menu_entries() -> Vec<MobileMenuEntry> {
    let mut entries = Vec::new();
    for link in NAV_LINKS {
        match link.target {
            NavTarget::View(view) => entries.push(MobileMenuEntry::Link {
                name: link.name,
                view,
                is_primary: link.is_primary,
                nested: false,
            }),
            NavTarget::Group(children) => {
                entries.push(MobileMenuEntry::Heading(link.name));
                entries.extend(children.iter().map(|child| MobileMenuEntry::Link {
                    name: child.name,
                    view: child.view,
                    is_primary: false,
                    nested: true,
                }));
            }
        }
    }
    entries
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscoverIcon {
    Person,
    Camera,
    Note,
}

/// Cards of the home page's "Discover Our World" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: DiscoverIcon,
}

pub const DISCOVER_CARDS: [DiscoverCard; 3] = [
    DiscoverCard {
        title: "Modeling",
        description: "Access an elite roster of diverse models and connect with top-tier agencies for runway, print, and commercial work.",
        icon: DiscoverIcon::Person,
    },
    DiscoverCard {
        title: "Film & TV",
        description: "Discover casting calls for blockbuster productions and independent films. Find the perfect talent for your next project.",
        icon: DiscoverIcon::Camera,
    },
    DiscoverCard {
        title: "Music",
        description: "Find talent for music videos, from lead roles to background dancers, and explore services to promote your latest tracks.",
        icon: DiscoverIcon::Note,
    },
];

/// Words scrolled across the marquee above the home page.
pub const HOME_TAGS: [&str; 19] = [
    "Men",
    "Women",
    "Curvy",
    "Slim",
    "Tall",
    "Petite",
    "Athletic",
    "Runway",
    "Commercial",
    "Editorial",
    "Fitness",
    "Beauty",
    "Alternative",
    "Classic",
    "Streetwear",
    "High Fashion",
    "Plus Size",
    "Influencer",
    "New Faces",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Image,
    Gif,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestMedia {
    pub src: &'static str,
    pub kind: MediaKind,
    pub in_color: bool,
    pub caption: &'static str,
}

pub const LATEST_MEDIA: [LatestMedia; 8] = [
    LatestMedia {
        src: "https://picsum.photos/seed/latest1/600/800",
        kind: MediaKind::Image,
        in_color: true,
        caption: "Editorial shoot for Vogue",
    },
    LatestMedia {
        src: "https://i.giphy.com/media/v1.Y2lkPTc5MGI3NjExbTZpa3MzbzNtaHdudG8yNGZ3eWRxdm15aHk0MHg2MDVscHptd254aiZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/3o7TKLz4EhMgk9v6mI/giphy.gif",
        kind: MediaKind::Gif,
        in_color: true,
        caption: "Behind the scenes at Fashion Week",
    },
    LatestMedia {
        src: "https://picsum.photos/seed/latest2/600/800",
        kind: MediaKind::Image,
        in_color: false,
        caption: "Classic portrait by A. Adams",
    },
    LatestMedia {
        src: "https://picsum.photos/seed/latest3/600/800",
        kind: MediaKind::Image,
        in_color: true,
        caption: "Summer campaign for Elysian",
    },
    LatestMedia {
        src: "https://picsum.photos/seed/latest4/600/800",
        kind: MediaKind::Image,
        in_color: false,
        caption: "Monochrome beauty shot",
    },
    LatestMedia {
        src: "https://i.giphy.com/media/v1.Y2lkPTc5MGI3NjExM3A4azVqOTF0NXZ2aGF6dG9oNDFhcm1mdzQyMWtqNTZyZmFvMGs5NSZlcD12MV9pbnRlcm5hbF9naWZfYnlfaWQmY3Q9Zw/l0Ex2en3v8t2pqr4c/giphy.gif",
        kind: MediaKind::Gif,
        in_color: true,
        caption: "Runway walk highlights",
    },
    LatestMedia {
        src: "https://picsum.photos/seed/latest5/600/800",
        kind: MediaKind::Image,
        in_color: true,
        caption: "Street style in Paris",
    },
    LatestMedia {
        src: "https://picsum.photos/seed/latest6/600/800",
        kind: MediaKind::Image,
        in_color: false,
        caption: "Timeless elegance",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn model_ids_are_unique_and_resolvable() {
        let ids = MODELS.iter().map(|model| model.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), MODELS.len());
        assert_eq!(model_by_id(15).map(|model| model.name), Some("Saskia van der Berg"));
        assert_eq!(model_by_id(99), None);
    }

    #[test]
    fn agencies_split_by_kind() {
        assert_eq!(agencies_of(AgencyKind::Modeling).count(), 3);
        assert_eq!(agencies_of(AgencyKind::Movie).count(), 3);
        assert_eq!(agencies_of(AgencyKind::Music).count(), 0);
    }

    #[test]
    fn every_tour_target_has_a_nav_link() {
        let anchors = NAV_LINKS
            .iter()
            .filter_map(|link| link.tour_anchor)
            .collect::<Vec<_>>();
        assert_eq!(
            anchors,
            vec![
                TourAnchor::Models,
                TourAnchor::ModelingAgencies,
                TourAnchor::MovieAgencies,
                TourAnchor::Music,
            ]
        );
    }

    #[test]
    fn nav_links_reach_every_view() {
        let mut views = Vec::new();
        for link in NAV_LINKS {
            match link.target {
                NavTarget::View(view) => views.push(view),
                NavTarget::Group(children) => views.extend(children.iter().map(|child| child.view)),
            }
        }
        for view in ViewId::ALL {
            assert!(views.contains(&view), "{view:?} has no nav link");
        }
    }

    #[test]
    fn image_urls_use_seeded_placeholders() {
        assert_eq!(MODELS[0].image_url, "https://picsum.photos/seed/AnyaPetrova/400/600");
        assert_eq!(model_anchor_id(4), "model-4");
    }

    #[test]
    fn mobile_menu_flattens_the_music_group() {
        let entries = mobile_menu_entries();
        assert_eq!(entries.len(), NAV_LINKS.len() + MUSIC_LINKS.len());
        let heading = entries
            .iter()
            .position(|entry| *entry == MobileMenuEntry::Heading("Music"));
        let Some(heading) = heading else {
            unreachable!("music group has a heading");
        };
        assert_eq!(
            entries[heading + 1],
            MobileMenuEntry::Link {
                name: "Music Video Casting",
                view: ViewId::MusicVideoCasting,
                is_primary: false,
                nested: true,
            }
        );
        assert_eq!(
            entries.last(),
            Some(&MobileMenuEntry::Link {
                name: "Apply",
                view: ViewId::Apply,
                is_primary: true,
                nested: false,
            })
        );
    }

    #[test]
    fn home_sections_carry_their_content() {
        let titles = DISCOVER_CARDS.iter().map(|card| card.title).collect::<Vec<_>>();
        assert_eq!(titles, ["Modeling", "Film & TV", "Music"]);
        assert_eq!(HOME_TAGS.first(), Some(&"Men"));
        assert_eq!(HOME_TAGS.last(), Some(&"New Faces"));
        assert_eq!(
            LATEST_MEDIA.iter().filter(|media| media.kind == MediaKind::Gif).count(),
            2
        );
        assert_eq!(LATEST_MEDIA.iter().filter(|media| !media.in_color).count(), 3);
    }
}

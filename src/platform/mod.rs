//! Platform identification for Linkprism
//!
//! This module holds the closed set of known web platforms, the category each
//! one belongs to, the static host tables used to recognize them, and the
//! tiered classifier that applies those tables to a URL.

mod category;
mod classifier;
pub mod patterns;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub use category::{category_for, PlatformCategory};
pub use classifier::{detect_platform, detect_platform_in};

/// A known web platform
///
/// Every variant has a stable snake_case identifier (`youtube_music`,
/// `github`, ...) used by `Display`, `FromStr` and serde. `Unknown` is the
/// sentinel for URLs that match no platform; it is a regular value, not an
/// error.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Platform {
    // ===== Video =====
    Youtube,
    YoutubeShorts,
    Vimeo,
    Dailymotion,
    Tiktok,
    InstagramReels,
    Loom,
    Streamable,
    FrameIo,

    // ===== Audio =====
    YoutubeMusic,
    Spotify,
    Soundcloud,
    AppleMusic,
    ApplePodcasts,
    AmazonMusic,
    Deezer,
    Tidal,
    Bandcamp,
    Mixcloud,
    Pandora,
    Iheartradio,
    Audible,
    Overcast,
    PocketCasts,
    LastFm,
    Genius,
    YandexMusic,
    QqMusic,

    // ===== Social =====
    Facebook,
    Instagram,
    Twitter,
    Reddit,
    Linkedin,
    Pinterest,
    Tumblr,
    Snapchat,
    Threads,
    Bluesky,
    Quora,
    Imgur,
    NineGag,
    Flickr,
    Deviantart,
    Behance,
    Dribbble,
    Medium,
    Goodreads,
    Wordpress,
    Blogger,
    Ghost,
    ProductHunt,

    // ===== Messaging =====
    Whatsapp,
    Telegram,
    Discord,
    Slack,
    Signal,
    Messenger,
    Line,
    Wechat,
    Zoom,
    GoogleMeet,
    MicrosoftTeams,
    Element,
    Gmail,
    Outlook,
    ProtonMail,

    // ===== Developer =====
    Github,
    GithubGist,
    GithubPages,
    Gitlab,
    GitlabPages,
    Bitbucket,
    StackOverflow,
    StackExchange,
    Npm,
    CratesIo,
    Pypi,
    DockerHub,
    Codepen,
    Codesandbox,
    Replit,
    Glitch,
    HackerNews,
    DevTo,
    Kaggle,
    HuggingFace,
    Sourceforge,
    Codeberg,
    Rubygems,
    MavenCentral,
    GoPackages,
    DocsRs,
    ReadTheDocs,
    Mdn,
    Leetcode,

    // ===== E-commerce =====
    Amazon,
    Ebay,
    Etsy,
    Shopify,
    Walmart,
    Target,
    BestBuy,
    Aliexpress,
    Alibaba,
    Temu,
    Shein,
    MercadoLibre,
    Rakuten,
    Zalando,
    Craigslist,
    Apple,
    AppStore,
    GooglePlay,
    Bigcommerce,
    Gumroad,

    // ===== Gaming =====
    Steam,
    EpicGames,
    Itchio,
    Roblox,
    Xbox,
    Playstation,
    Nintendo,
    Gog,
    BattleNet,
    ChessCom,
    Lichess,

    // ===== Financial =====
    Paypal,
    Venmo,
    CashApp,
    Stripe,
    Wise,
    Revolut,
    Robinhood,
    Chase,
    BankOfAmerica,
    Klarna,
    Square,
    TradingView,
    YahooFinance,
    GooglePay,

    // ===== Dating =====
    Tinder,
    Bumble,
    Hinge,
    Okcupid,
    MatchCom,
    Grindr,

    // ===== Cloud =====
    GoogleDrive,
    GooglePhotos,
    Dropbox,
    Onedrive,
    Icloud,
    Box,
    Mega,
    Wetransfer,
    Aws,
    Azure,
    GoogleCloud,
    Cloudflare,
    Firebase,
    Netlify,
    Vercel,
    Heroku,
    Render,
    FlyIo,
    Supabase,

    // ===== News =====
    Cnn,
    Bbc,
    NewYorkTimes,
    Guardian,
    Reuters,
    Bloomberg,
    WallStreetJournal,
    Npr,
    Forbes,
    Techcrunch,
    TheVerge,
    Wired,
    ArsTechnica,
    FinancialTimes,
    Yahoo,
    GoogleNews,

    // ===== Learning =====
    Wikipedia,
    Coursera,
    Udemy,
    Edx,
    KhanAcademy,
    Duolingo,
    Ted,
    Codecademy,
    FreeCodeCamp,
    Arxiv,
    ResearchGate,
    GoogleScholar,
    Fandom,
    InternetArchive,

    // ===== Web3 =====
    Coinbase,
    Binance,
    Kraken,
    Opensea,
    Etherscan,
    Metamask,
    Uniswap,
    MagicEden,
    Ens,
    Coingecko,
    Warpcast,

    // ===== Streaming =====
    Netflix,
    PrimeVideo,
    DisneyPlus,
    Hulu,
    Max,
    AppleTv,
    YoutubeTv,
    ParamountPlus,
    Peacock,
    Crunchyroll,
    Twitch,
    Kick,
    Plex,
    Roku,

    // ===== Maps =====
    GoogleMaps,
    AppleMaps,
    Waze,
    OpenStreetMap,
    HereWeGo,
    Strava,
    Alltrails,

    // ===== Food =====
    Doordash,
    UberEats,
    Grubhub,
    Deliveroo,
    JustEat,
    Instacart,
    Yelp,
    Opentable,
    Zomato,
    Swiggy,

    // ===== Travel =====
    Airbnb,
    BookingCom,
    Expedia,
    Tripadvisor,
    Kayak,
    Skyscanner,
    Vrbo,
    Uber,
    Lyft,

    // ===== Productivity =====
    Google,
    GoogleDocs,
    GoogleCalendar,
    GoogleTranslate,
    Gemini,
    Microsoft,
    MicrosoftOffice,
    Notion,
    Trello,
    Asana,
    Atlassian,
    Airtable,
    Figma,
    Canva,
    Miro,
    Calendly,
    Linear,
    Openai,
    Chatgpt,
    Claude,
    Perplexity,
    Bing,
    Duckduckgo,
    Webflow,
    Wix,
    Squarespace,

    // ===== Subscription =====
    Patreon,
    Onlyfans,
    Substack,
    Kofi,
    Buymeacoffee,
    Kickstarter,
    Indiegogo,
    Gofundme,
    OpenCollective,

    // ===== Regional =====
    Vk,
    OkRu,
    Weibo,
    Douyin,
    Bilibili,
    Niconico,
    Naver,
    Kakao,
    Yandex,
    Baidu,
    Qq,
    Zhihu,
    Xiaohongshu,
    Taobao,
    JdCom,
    Flipkart,

    // ===== Alternative =====
    Mastodon,
    Lemmy,
    Misskey,
    Pixelfed,
    Peertube,
    Gab,
    TruthSocial,
    Odysee,
    Bitchute,
    Rumble,
    Nostr,

    // ===== Sentinel =====
    /// No known platform matched
    #[default]
    Unknown,
}

impl Platform {
    /// Returns the stable identifier of this platform (e.g. "youtube_music")
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Returns true for every platform except the `Unknown` sentinel
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the category this platform belongs to
    pub fn category(&self) -> PlatformCategory {
        category_for(*self)
    }

    /// Returns the hostnames listed for this platform in the generic pattern table
    ///
    /// Platforms recognized only through special subdomain rules, path
    /// overrides or custom subdomain patterns may return an empty slice.
    pub fn domains(&self) -> &'static [&'static str] {
        patterns::PLATFORM_PATTERNS
            .iter()
            .find(|entry| entry.platform == *self)
            .map(|entry| entry.domains)
            .unwrap_or(&[])
    }

    /// Returns the human-readable platform name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Youtube => "YouTube",
            Self::YoutubeShorts => "YouTube Shorts",
            Self::Vimeo => "Vimeo",
            Self::Dailymotion => "Dailymotion",
            Self::Tiktok => "TikTok",
            Self::InstagramReels => "Instagram Reels",
            Self::Loom => "Loom",
            Self::Streamable => "Streamable",
            Self::FrameIo => "Frame.io",
            Self::YoutubeMusic => "YouTube Music",
            Self::Spotify => "Spotify",
            Self::Soundcloud => "SoundCloud",
            Self::AppleMusic => "Apple Music",
            Self::ApplePodcasts => "Apple Podcasts",
            Self::AmazonMusic => "Amazon Music",
            Self::Deezer => "Deezer",
            Self::Tidal => "Tidal",
            Self::Bandcamp => "Bandcamp",
            Self::Mixcloud => "Mixcloud",
            Self::Pandora => "Pandora",
            Self::Iheartradio => "iHeartRadio",
            Self::Audible => "Audible",
            Self::Overcast => "Overcast",
            Self::PocketCasts => "Pocket Casts",
            Self::LastFm => "Last.fm",
            Self::Genius => "Genius",
            Self::YandexMusic => "Yandex Music",
            Self::QqMusic => "QQ Music",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Twitter => "X (Twitter)",
            Self::Reddit => "Reddit",
            Self::Linkedin => "LinkedIn",
            Self::Pinterest => "Pinterest",
            Self::Tumblr => "Tumblr",
            Self::Snapchat => "Snapchat",
            Self::Threads => "Threads",
            Self::Bluesky => "Bluesky",
            Self::Quora => "Quora",
            Self::Imgur => "Imgur",
            Self::NineGag => "9GAG",
            Self::Flickr => "Flickr",
            Self::Deviantart => "DeviantArt",
            Self::Behance => "Behance",
            Self::Dribbble => "Dribbble",
            Self::Medium => "Medium",
            Self::Goodreads => "Goodreads",
            Self::Wordpress => "WordPress",
            Self::Blogger => "Blogger",
            Self::Ghost => "Ghost",
            Self::ProductHunt => "Product Hunt",
            Self::Whatsapp => "WhatsApp",
            Self::Telegram => "Telegram",
            Self::Discord => "Discord",
            Self::Slack => "Slack",
            Self::Signal => "Signal",
            Self::Messenger => "Messenger",
            Self::Line => "LINE",
            Self::Wechat => "WeChat",
            Self::Zoom => "Zoom",
            Self::GoogleMeet => "Google Meet",
            Self::MicrosoftTeams => "Microsoft Teams",
            Self::Element => "Element",
            Self::Gmail => "Gmail",
            Self::Outlook => "Outlook",
            Self::ProtonMail => "Proton Mail",
            Self::Github => "GitHub",
            Self::GithubGist => "GitHub Gist",
            Self::GithubPages => "GitHub Pages",
            Self::Gitlab => "GitLab",
            Self::GitlabPages => "GitLab Pages",
            Self::Bitbucket => "Bitbucket",
            Self::StackOverflow => "Stack Overflow",
            Self::StackExchange => "Stack Exchange",
            Self::Npm => "npm",
            Self::CratesIo => "crates.io",
            Self::Pypi => "PyPI",
            Self::DockerHub => "Docker Hub",
            Self::Codepen => "CodePen",
            Self::Codesandbox => "CodeSandbox",
            Self::Replit => "Replit",
            Self::Glitch => "Glitch",
            Self::HackerNews => "Hacker News",
            Self::DevTo => "DEV Community",
            Self::Kaggle => "Kaggle",
            Self::HuggingFace => "Hugging Face",
            Self::Sourceforge => "SourceForge",
            Self::Codeberg => "Codeberg",
            Self::Rubygems => "RubyGems",
            Self::MavenCentral => "Maven Central",
            Self::GoPackages => "Go Packages",
            Self::DocsRs => "Docs.rs",
            Self::ReadTheDocs => "Read the Docs",
            Self::Mdn => "MDN Web Docs",
            Self::Leetcode => "LeetCode",
            Self::Amazon => "Amazon",
            Self::Ebay => "eBay",
            Self::Etsy => "Etsy",
            Self::Shopify => "Shopify",
            Self::Walmart => "Walmart",
            Self::Target => "Target",
            Self::BestBuy => "Best Buy",
            Self::Aliexpress => "AliExpress",
            Self::Alibaba => "Alibaba",
            Self::Temu => "Temu",
            Self::Shein => "SHEIN",
            Self::MercadoLibre => "Mercado Libre",
            Self::Rakuten => "Rakuten",
            Self::Zalando => "Zalando",
            Self::Craigslist => "Craigslist",
            Self::Apple => "Apple",
            Self::AppStore => "App Store",
            Self::GooglePlay => "Google Play",
            Self::Bigcommerce => "BigCommerce",
            Self::Gumroad => "Gumroad",
            Self::Steam => "Steam",
            Self::EpicGames => "Epic Games",
            Self::Itchio => "itch.io",
            Self::Roblox => "Roblox",
            Self::Xbox => "Xbox",
            Self::Playstation => "PlayStation",
            Self::Nintendo => "Nintendo",
            Self::Gog => "GOG",
            Self::BattleNet => "Battle.net",
            Self::ChessCom => "Chess.com",
            Self::Lichess => "Lichess",
            Self::Paypal => "PayPal",
            Self::Venmo => "Venmo",
            Self::CashApp => "Cash App",
            Self::Stripe => "Stripe",
            Self::Wise => "Wise",
            Self::Revolut => "Revolut",
            Self::Robinhood => "Robinhood",
            Self::Chase => "Chase",
            Self::BankOfAmerica => "Bank of America",
            Self::Klarna => "Klarna",
            Self::Square => "Square",
            Self::TradingView => "TradingView",
            Self::YahooFinance => "Yahoo Finance",
            Self::GooglePay => "Google Pay",
            Self::Tinder => "Tinder",
            Self::Bumble => "Bumble",
            Self::Hinge => "Hinge",
            Self::Okcupid => "OkCupid",
            Self::MatchCom => "Match.com",
            Self::Grindr => "Grindr",
            Self::GoogleDrive => "Google Drive",
            Self::GooglePhotos => "Google Photos",
            Self::Dropbox => "Dropbox",
            Self::Onedrive => "OneDrive",
            Self::Icloud => "iCloud",
            Self::Box => "Box",
            Self::Mega => "MEGA",
            Self::Wetransfer => "WeTransfer",
            Self::Aws => "Amazon Web Services",
            Self::Azure => "Microsoft Azure",
            Self::GoogleCloud => "Google Cloud",
            Self::Cloudflare => "Cloudflare",
            Self::Firebase => "Firebase",
            Self::Netlify => "Netlify",
            Self::Vercel => "Vercel",
            Self::Heroku => "Heroku",
            Self::Render => "Render",
            Self::FlyIo => "Fly.io",
            Self::Supabase => "Supabase",
            Self::Cnn => "CNN",
            Self::Bbc => "BBC",
            Self::NewYorkTimes => "The New York Times",
            Self::Guardian => "The Guardian",
            Self::Reuters => "Reuters",
            Self::Bloomberg => "Bloomberg",
            Self::WallStreetJournal => "The Wall Street Journal",
            Self::Npr => "NPR",
            Self::Forbes => "Forbes",
            Self::Techcrunch => "TechCrunch",
            Self::TheVerge => "The Verge",
            Self::Wired => "Wired",
            Self::ArsTechnica => "Ars Technica",
            Self::FinancialTimes => "Financial Times",
            Self::Yahoo => "Yahoo",
            Self::GoogleNews => "Google News",
            Self::Wikipedia => "Wikipedia",
            Self::Coursera => "Coursera",
            Self::Udemy => "Udemy",
            Self::Edx => "edX",
            Self::KhanAcademy => "Khan Academy",
            Self::Duolingo => "Duolingo",
            Self::Ted => "TED",
            Self::Codecademy => "Codecademy",
            Self::FreeCodeCamp => "freeCodeCamp",
            Self::Arxiv => "arXiv",
            Self::ResearchGate => "ResearchGate",
            Self::GoogleScholar => "Google Scholar",
            Self::Fandom => "Fandom",
            Self::InternetArchive => "Internet Archive",
            Self::Coinbase => "Coinbase",
            Self::Binance => "Binance",
            Self::Kraken => "Kraken",
            Self::Opensea => "OpenSea",
            Self::Etherscan => "Etherscan",
            Self::Metamask => "MetaMask",
            Self::Uniswap => "Uniswap",
            Self::MagicEden => "Magic Eden",
            Self::Ens => "ENS",
            Self::Coingecko => "CoinGecko",
            Self::Warpcast => "Warpcast",
            Self::Netflix => "Netflix",
            Self::PrimeVideo => "Prime Video",
            Self::DisneyPlus => "Disney+",
            Self::Hulu => "Hulu",
            Self::Max => "Max",
            Self::AppleTv => "Apple TV+",
            Self::YoutubeTv => "YouTube TV",
            Self::ParamountPlus => "Paramount+",
            Self::Peacock => "Peacock",
            Self::Crunchyroll => "Crunchyroll",
            Self::Twitch => "Twitch",
            Self::Kick => "Kick",
            Self::Plex => "Plex",
            Self::Roku => "Roku",
            Self::GoogleMaps => "Google Maps",
            Self::AppleMaps => "Apple Maps",
            Self::Waze => "Waze",
            Self::OpenStreetMap => "OpenStreetMap",
            Self::HereWeGo => "HERE WeGo",
            Self::Strava => "Strava",
            Self::Alltrails => "AllTrails",
            Self::Doordash => "DoorDash",
            Self::UberEats => "Uber Eats",
            Self::Grubhub => "Grubhub",
            Self::Deliveroo => "Deliveroo",
            Self::JustEat => "Just Eat",
            Self::Instacart => "Instacart",
            Self::Yelp => "Yelp",
            Self::Opentable => "OpenTable",
            Self::Zomato => "Zomato",
            Self::Swiggy => "Swiggy",
            Self::Airbnb => "Airbnb",
            Self::BookingCom => "Booking.com",
            Self::Expedia => "Expedia",
            Self::Tripadvisor => "Tripadvisor",
            Self::Kayak => "Kayak",
            Self::Skyscanner => "Skyscanner",
            Self::Vrbo => "Vrbo",
            Self::Uber => "Uber",
            Self::Lyft => "Lyft",
            Self::Google => "Google",
            Self::GoogleDocs => "Google Docs",
            Self::GoogleCalendar => "Google Calendar",
            Self::GoogleTranslate => "Google Translate",
            Self::Gemini => "Gemini",
            Self::Microsoft => "Microsoft",
            Self::MicrosoftOffice => "Microsoft 365",
            Self::Notion => "Notion",
            Self::Trello => "Trello",
            Self::Asana => "Asana",
            Self::Atlassian => "Atlassian",
            Self::Airtable => "Airtable",
            Self::Figma => "Figma",
            Self::Canva => "Canva",
            Self::Miro => "Miro",
            Self::Calendly => "Calendly",
            Self::Linear => "Linear",
            Self::Openai => "OpenAI",
            Self::Chatgpt => "ChatGPT",
            Self::Claude => "Claude",
            Self::Perplexity => "Perplexity",
            Self::Bing => "Bing",
            Self::Duckduckgo => "DuckDuckGo",
            Self::Webflow => "Webflow",
            Self::Wix => "Wix",
            Self::Squarespace => "Squarespace",
            Self::Patreon => "Patreon",
            Self::Onlyfans => "OnlyFans",
            Self::Substack => "Substack",
            Self::Kofi => "Ko-fi",
            Self::Buymeacoffee => "Buy Me a Coffee",
            Self::Kickstarter => "Kickstarter",
            Self::Indiegogo => "Indiegogo",
            Self::Gofundme => "GoFundMe",
            Self::OpenCollective => "Open Collective",
            Self::Vk => "VK",
            Self::OkRu => "OK.ru",
            Self::Weibo => "Weibo",
            Self::Douyin => "Douyin",
            Self::Bilibili => "Bilibili",
            Self::Niconico => "Niconico",
            Self::Naver => "Naver",
            Self::Kakao => "Kakao",
            Self::Yandex => "Yandex",
            Self::Baidu => "Baidu",
            Self::Qq => "QQ",
            Self::Zhihu => "Zhihu",
            Self::Xiaohongshu => "Xiaohongshu",
            Self::Taobao => "Taobao",
            Self::JdCom => "JD.com",
            Self::Flipkart => "Flipkart",
            Self::Mastodon => "Mastodon",
            Self::Lemmy => "Lemmy",
            Self::Misskey => "Misskey",
            Self::Pixelfed => "Pixelfed",
            Self::Peertube => "PeerTube",
            Self::Gab => "Gab",
            Self::TruthSocial => "Truth Social",
            Self::Odysee => "Odysee",
            Self::Bitchute => "BitChute",
            Self::Rumble => "Rumble",
            Self::Nostr => "Nostr",
            Self::Unknown => "Unknown",
        }
    }
}

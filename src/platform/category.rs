use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use super::Platform;

/// A semantic grouping of platforms by primary function
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
pub enum PlatformCategory {
    Video,
    Audio,
    Social,
    Messaging,
    Developer,
    Ecommerce,
    Gaming,
    Financial,
    Dating,
    Cloud,
    News,
    Learning,
    #[serde(rename = "web3")]
    #[strum(serialize = "web3")]
    Web3,
    Streaming,
    Maps,
    Food,
    Travel,
    Productivity,
    Subscription,
    Regional,
    Alternative,
    #[default]
    Unknown,
}

impl PlatformCategory {
    /// Returns the stable identifier of this category (e.g. "ecommerce")
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Returns the human-readable category label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Social => "Social",
            Self::Messaging => "Messaging",
            Self::Developer => "Developer",
            Self::Ecommerce => "E-commerce",
            Self::Gaming => "Gaming",
            Self::Financial => "Financial",
            Self::Dating => "Dating",
            Self::Cloud => "Cloud",
            Self::News => "News",
            Self::Learning => "Learning",
            Self::Web3 => "Web3",
            Self::Streaming => "Streaming",
            Self::Maps => "Maps",
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Productivity => "Productivity",
            Self::Subscription => "Subscription",
            Self::Regional => "Regional",
            Self::Alternative => "Alternative",
            Self::Unknown => "Unknown",
        }
    }
}

/// Maps a platform to its category
///
/// The match is exhaustive: adding a platform without assigning it a category
/// does not compile. `Platform::Unknown` maps to `PlatformCategory::Unknown`;
/// every other platform maps to a concrete category.
///
/// # Examples
///
/// ```
/// use linkprism::{category_for, Platform, PlatformCategory};
///
/// assert_eq!(category_for(Platform::Youtube), PlatformCategory::Video);
/// assert_eq!(category_for(Platform::YoutubeMusic), PlatformCategory::Audio);
/// assert_eq!(category_for(Platform::Unknown), PlatformCategory::Unknown);
/// ```
pub fn category_for(platform: Platform) -> PlatformCategory {
    match platform {
        Platform::Youtube
        | Platform::YoutubeShorts
        | Platform::Vimeo
        | Platform::Dailymotion
        | Platform::Tiktok
        | Platform::InstagramReels
        | Platform::Loom
        | Platform::Streamable
        | Platform::FrameIo => PlatformCategory::Video,
        Platform::YoutubeMusic
        | Platform::Spotify
        | Platform::Soundcloud
        | Platform::AppleMusic
        | Platform::ApplePodcasts
        | Platform::AmazonMusic
        | Platform::Deezer
        | Platform::Tidal
        | Platform::Bandcamp
        | Platform::Mixcloud
        | Platform::Pandora
        | Platform::Iheartradio
        | Platform::Audible
        | Platform::Overcast
        | Platform::PocketCasts
        | Platform::LastFm
        | Platform::Genius
        | Platform::YandexMusic
        | Platform::QqMusic => PlatformCategory::Audio,
        Platform::Facebook
        | Platform::Instagram
        | Platform::Twitter
        | Platform::Reddit
        | Platform::Linkedin
        | Platform::Pinterest
        | Platform::Tumblr
        | Platform::Snapchat
        | Platform::Threads
        | Platform::Bluesky
        | Platform::Quora
        | Platform::Imgur
        | Platform::NineGag
        | Platform::Flickr
        | Platform::Deviantart
        | Platform::Behance
        | Platform::Dribbble
        | Platform::Medium
        | Platform::Goodreads
        | Platform::Wordpress
        | Platform::Blogger
        | Platform::Ghost
        | Platform::ProductHunt => PlatformCategory::Social,
        Platform::Whatsapp
        | Platform::Telegram
        | Platform::Discord
        | Platform::Slack
        | Platform::Signal
        | Platform::Messenger
        | Platform::Line
        | Platform::Wechat
        | Platform::Zoom
        | Platform::GoogleMeet
        | Platform::MicrosoftTeams
        | Platform::Element
        | Platform::Gmail
        | Platform::Outlook
        | Platform::ProtonMail => PlatformCategory::Messaging,
        Platform::Github
        | Platform::GithubGist
        | Platform::GithubPages
        | Platform::Gitlab
        | Platform::GitlabPages
        | Platform::Bitbucket
        | Platform::StackOverflow
        | Platform::StackExchange
        | Platform::Npm
        | Platform::CratesIo
        | Platform::Pypi
        | Platform::DockerHub
        | Platform::Codepen
        | Platform::Codesandbox
        | Platform::Replit
        | Platform::Glitch
        | Platform::HackerNews
        | Platform::DevTo
        | Platform::Kaggle
        | Platform::HuggingFace
        | Platform::Sourceforge
        | Platform::Codeberg
        | Platform::Rubygems
        | Platform::MavenCentral
        | Platform::GoPackages
        | Platform::DocsRs
        | Platform::ReadTheDocs
        | Platform::Mdn
        | Platform::Leetcode => PlatformCategory::Developer,
        Platform::Amazon
        | Platform::Ebay
        | Platform::Etsy
        | Platform::Shopify
        | Platform::Walmart
        | Platform::Target
        | Platform::BestBuy
        | Platform::Aliexpress
        | Platform::Alibaba
        | Platform::Temu
        | Platform::Shein
        | Platform::MercadoLibre
        | Platform::Rakuten
        | Platform::Zalando
        | Platform::Craigslist
        | Platform::Apple
        | Platform::AppStore
        | Platform::GooglePlay
        | Platform::Bigcommerce
        | Platform::Gumroad => PlatformCategory::Ecommerce,
        Platform::Steam
        | Platform::EpicGames
        | Platform::Itchio
        | Platform::Roblox
        | Platform::Xbox
        | Platform::Playstation
        | Platform::Nintendo
        | Platform::Gog
        | Platform::BattleNet
        | Platform::ChessCom
        | Platform::Lichess => PlatformCategory::Gaming,
        Platform::Paypal
        | Platform::Venmo
        | Platform::CashApp
        | Platform::Stripe
        | Platform::Wise
        | Platform::Revolut
        | Platform::Robinhood
        | Platform::Chase
        | Platform::BankOfAmerica
        | Platform::Klarna
        | Platform::Square
        | Platform::TradingView
        | Platform::YahooFinance
        | Platform::GooglePay => PlatformCategory::Financial,
        Platform::Tinder
        | Platform::Bumble
        | Platform::Hinge
        | Platform::Okcupid
        | Platform::MatchCom
        | Platform::Grindr => PlatformCategory::Dating,
        Platform::GoogleDrive
        | Platform::GooglePhotos
        | Platform::Dropbox
        | Platform::Onedrive
        | Platform::Icloud
        | Platform::Box
        | Platform::Mega
        | Platform::Wetransfer
        | Platform::Aws
        | Platform::Azure
        | Platform::GoogleCloud
        | Platform::Cloudflare
        | Platform::Firebase
        | Platform::Netlify
        | Platform::Vercel
        | Platform::Heroku
        | Platform::Render
        | Platform::FlyIo
        | Platform::Supabase => PlatformCategory::Cloud,
        Platform::Cnn
        | Platform::Bbc
        | Platform::NewYorkTimes
        | Platform::Guardian
        | Platform::Reuters
        | Platform::Bloomberg
        | Platform::WallStreetJournal
        | Platform::Npr
        | Platform::Forbes
        | Platform::Techcrunch
        | Platform::TheVerge
        | Platform::Wired
        | Platform::ArsTechnica
        | Platform::FinancialTimes
        | Platform::Yahoo
        | Platform::GoogleNews => PlatformCategory::News,
        Platform::Wikipedia
        | Platform::Coursera
        | Platform::Udemy
        | Platform::Edx
        | Platform::KhanAcademy
        | Platform::Duolingo
        | Platform::Ted
        | Platform::Codecademy
        | Platform::FreeCodeCamp
        | Platform::Arxiv
        | Platform::ResearchGate
        | Platform::GoogleScholar
        | Platform::Fandom
        | Platform::InternetArchive => PlatformCategory::Learning,
        Platform::Coinbase
        | Platform::Binance
        | Platform::Kraken
        | Platform::Opensea
        | Platform::Etherscan
        | Platform::Metamask
        | Platform::Uniswap
        | Platform::MagicEden
        | Platform::Ens
        | Platform::Coingecko
        | Platform::Warpcast => PlatformCategory::Web3,
        Platform::Netflix
        | Platform::PrimeVideo
        | Platform::DisneyPlus
        | Platform::Hulu
        | Platform::Max
        | Platform::AppleTv
        | Platform::YoutubeTv
        | Platform::ParamountPlus
        | Platform::Peacock
        | Platform::Crunchyroll
        | Platform::Twitch
        | Platform::Kick
        | Platform::Plex
        | Platform::Roku => PlatformCategory::Streaming,
        Platform::GoogleMaps
        | Platform::AppleMaps
        | Platform::Waze
        | Platform::OpenStreetMap
        | Platform::HereWeGo
        | Platform::Strava
        | Platform::Alltrails => PlatformCategory::Maps,
        Platform::Doordash
        | Platform::UberEats
        | Platform::Grubhub
        | Platform::Deliveroo
        | Platform::JustEat
        | Platform::Instacart
        | Platform::Yelp
        | Platform::Opentable
        | Platform::Zomato
        | Platform::Swiggy => PlatformCategory::Food,
        Platform::Airbnb
        | Platform::BookingCom
        | Platform::Expedia
        | Platform::Tripadvisor
        | Platform::Kayak
        | Platform::Skyscanner
        | Platform::Vrbo
        | Platform::Uber
        | Platform::Lyft => PlatformCategory::Travel,
        Platform::Google
        | Platform::GoogleDocs
        | Platform::GoogleCalendar
        | Platform::GoogleTranslate
        | Platform::Gemini
        | Platform::Microsoft
        | Platform::MicrosoftOffice
        | Platform::Notion
        | Platform::Trello
        | Platform::Asana
        | Platform::Atlassian
        | Platform::Airtable
        | Platform::Figma
        | Platform::Canva
        | Platform::Miro
        | Platform::Calendly
        | Platform::Linear
        | Platform::Openai
        | Platform::Chatgpt
        | Platform::Claude
        | Platform::Perplexity
        | Platform::Bing
        | Platform::Duckduckgo
        | Platform::Webflow
        | Platform::Wix
        | Platform::Squarespace => PlatformCategory::Productivity,
        Platform::Patreon
        | Platform::Onlyfans
        | Platform::Substack
        | Platform::Kofi
        | Platform::Buymeacoffee
        | Platform::Kickstarter
        | Platform::Indiegogo
        | Platform::Gofundme
        | Platform::OpenCollective => PlatformCategory::Subscription,
        Platform::Vk
        | Platform::OkRu
        | Platform::Weibo
        | Platform::Douyin
        | Platform::Bilibili
        | Platform::Niconico
        | Platform::Naver
        | Platform::Kakao
        | Platform::Yandex
        | Platform::Baidu
        | Platform::Qq
        | Platform::Zhihu
        | Platform::Xiaohongshu
        | Platform::Taobao
        | Platform::JdCom
        | Platform::Flipkart => PlatformCategory::Regional,
        Platform::Mastodon
        | Platform::Lemmy
        | Platform::Misskey
        | Platform::Pixelfed
        | Platform::Peertube
        | Platform::Gab
        | Platform::TruthSocial
        | Platform::Odysee
        | Platform::Bitchute
        | Platform::Rumble
        | Platform::Nostr => PlatformCategory::Alternative,
        Platform::Unknown => PlatformCategory::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_known_platform_has_a_category() {
        for platform in Platform::iter().filter(|p| p.is_known()) {
            assert_ne!(
                category_for(platform),
                PlatformCategory::Unknown,
                "{:?} has no category",
                platform
            );
        }
    }

    #[test]
    fn test_unknown_maps_to_unknown() {
        assert_eq!(category_for(Platform::Unknown), PlatformCategory::Unknown);
    }

    #[test]
    fn test_every_category_is_used() {
        let used: HashSet<PlatformCategory> = Platform::iter().map(category_for).collect();
        for category in PlatformCategory::iter() {
            assert!(used.contains(&category), "{:?} has no platforms", category);
        }
    }

    #[test]
    fn test_sub_services_differ_from_parent() {
        assert_eq!(category_for(Platform::Youtube), PlatformCategory::Video);
        assert_eq!(category_for(Platform::YoutubeMusic), PlatformCategory::Audio);
        assert_eq!(category_for(Platform::YoutubeTv), PlatformCategory::Streaming);
        assert_eq!(category_for(Platform::Amazon), PlatformCategory::Ecommerce);
        assert_eq!(category_for(Platform::Aws), PlatformCategory::Cloud);
        assert_eq!(category_for(Platform::GoogleMaps), PlatformCategory::Maps);
    }

    #[test]
    fn test_representative_categories() {
        assert_eq!(category_for(Platform::Github), PlatformCategory::Developer);
        assert_eq!(category_for(Platform::Twitter), PlatformCategory::Social);
        assert_eq!(category_for(Platform::Discord), PlatformCategory::Messaging);
        assert_eq!(category_for(Platform::Paypal), PlatformCategory::Financial);
        assert_eq!(category_for(Platform::Coinbase), PlatformCategory::Web3);
        assert_eq!(category_for(Platform::Netflix), PlatformCategory::Streaming);
        assert_eq!(category_for(Platform::Tinder), PlatformCategory::Dating);
        assert_eq!(category_for(Platform::Mastodon), PlatformCategory::Alternative);
        assert_eq!(category_for(Platform::Weibo), PlatformCategory::Regional);
    }

    #[test]
    fn test_method_matches_function() {
        for platform in Platform::iter() {
            assert_eq!(platform.category(), category_for(platform));
        }
    }

    #[test]
    fn test_category_identifiers() {
        assert_eq!(PlatformCategory::Web3.as_str(), "web3");
        assert_eq!(PlatformCategory::Ecommerce.to_string(), "ecommerce");
        assert_eq!("web3".parse::<PlatformCategory>(), Ok(PlatformCategory::Web3));
        assert_eq!(
            serde_json::to_string(&PlatformCategory::Web3).unwrap(),
            "\"web3\""
        );
        assert_eq!(PlatformCategory::Ecommerce.label(), "E-commerce");
    }
}

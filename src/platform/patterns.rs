//! Static host tables for platform detection
//!
//! Three tables are consulted by the classifier, each with its own matching
//! rule:
//!
//! 1. [`SPECIAL_SUBDOMAIN_RULES`]: exact clean-host matches, checked first, for
//!    subdomains that belong to a different platform than their parent domain
//! 2. [`PLATFORM_PATTERNS`]: generic domain/suffix matching; entries of
//!    platforms in [`SKIPPED_PLATFORMS`] are ignored here
//! 3. [`CUSTOM_SUBDOMAIN_RULES`]: substring containment, checked last, for
//!    hosting suffixes such as `.myshopify.com`
//!
//! No two platforms outside the skip set may share a domain, or have one
//! domain be a subdomain of another's. The tests below enforce this so the
//! generic tier never depends on table order.

use super::Platform;

/// A platform and the hostnames that identify it
#[derive(Debug, Clone, Copy)]
pub struct PatternEntry {
    pub platform: Platform,
    pub domains: &'static [&'static str],
}

/// An exact clean host that resolves to a specific platform
#[derive(Debug, Clone, Copy)]
pub struct SpecialSubdomainRule {
    pub host: &'static str,
    pub platform: Platform,
}

/// A substring that identifies a platform anywhere in a host
#[derive(Debug, Clone, Copy)]
pub struct CustomSubdomainRule {
    pub platform: Platform,
    pub pattern: &'static str,
}

const fn entry(platform: Platform, domains: &'static [&'static str]) -> PatternEntry {
    PatternEntry { platform, domains }
}

const fn special(host: &'static str, platform: Platform) -> SpecialSubdomainRule {
    SpecialSubdomainRule { host, platform }
}

const fn custom(platform: Platform, pattern: &'static str) -> CustomSubdomainRule {
    CustomSubdomainRule { platform, pattern }
}

/// Exact-host overrides, checked in order before generic matching
pub static SPECIAL_SUBDOMAIN_RULES: &[SpecialSubdomainRule] = &[
    special("music.youtube.com", Platform::YoutubeMusic),
    special("tv.youtube.com", Platform::YoutubeTv),
    special("music.apple.com", Platform::AppleMusic),
    special("podcasts.apple.com", Platform::ApplePodcasts),
    special("tv.apple.com", Platform::AppleTv),
    special("apps.apple.com", Platform::AppStore),
    special("itunes.apple.com", Platform::AppStore),
    special("maps.apple.com", Platform::AppleMaps),
    special("music.amazon.com", Platform::AmazonMusic),
    special("aws.amazon.com", Platform::Aws),
    special("console.aws.amazon.com", Platform::Aws),
    special("music.yandex.ru", Platform::YandexMusic),
    special("music.yandex.com", Platform::YandexMusic),
    special("y.qq.com", Platform::QqMusic),
    special("weixin.qq.com", Platform::Wechat),
    special("maps.google.com", Platform::GoogleMaps),
    special("maps.app.goo.gl", Platform::GoogleMaps),
    special("drive.google.com", Platform::GoogleDrive),
    special("docs.google.com", Platform::GoogleDocs),
    special("calendar.google.com", Platform::GoogleCalendar),
    special("translate.google.com", Platform::GoogleTranslate),
    special("meet.google.com", Platform::GoogleMeet),
    special("mail.google.com", Platform::Gmail),
    special("play.google.com", Platform::GooglePlay),
    special("news.google.com", Platform::GoogleNews),
    special("photos.google.com", Platform::GooglePhotos),
    special("pay.google.com", Platform::GooglePay),
    special("scholar.google.com", Platform::GoogleScholar),
    special("cloud.google.com", Platform::GoogleCloud),
    special("console.cloud.google.com", Platform::GoogleCloud),
    special("firebase.google.com", Platform::Firebase),
    special("gemini.google.com", Platform::Gemini),
    special("gist.github.com", Platform::GithubGist),
    special("teams.microsoft.com", Platform::MicrosoftTeams),
    special("teams.live.com", Platform::MicrosoftTeams),
    special("azure.microsoft.com", Platform::Azure),
    special("outlook.office.com", Platform::Outlook),
    special("outlook.office365.com", Platform::Outlook),
    special("finance.yahoo.com", Platform::YahooFinance),
    special("chat.openai.com", Platform::Chatgpt),
];

/// Platforms whose generic entries are handled entirely by special rules or
/// path overrides
pub static SKIPPED_PLATFORMS: &[Platform] = &[
    Platform::YoutubeShorts,
    Platform::InstagramReels,
    Platform::YoutubeMusic,
    Platform::YoutubeTv,
    Platform::AppleMusic,
    Platform::ApplePodcasts,
    Platform::AmazonMusic,
    Platform::YandexMusic,
    Platform::QqMusic,
    Platform::GoogleMeet,
    Platform::MicrosoftTeams,
    Platform::Gmail,
    Platform::GithubGist,
    Platform::AppStore,
    Platform::GooglePlay,
    Platform::YahooFinance,
    Platform::GooglePay,
    Platform::GoogleDrive,
    Platform::GooglePhotos,
    Platform::GoogleCloud,
    Platform::GoogleNews,
    Platform::GoogleScholar,
    Platform::AppleTv,
    Platform::GoogleMaps,
    Platform::AppleMaps,
    Platform::GoogleDocs,
    Platform::GoogleCalendar,
    Platform::GoogleTranslate,
    Platform::Gemini,
];

/// Generic platform table, matched by exact domain or subdomain suffix
pub static PLATFORM_PATTERNS: &[PatternEntry] = &[
    // Video
    entry(Platform::Youtube, &["youtube.com", "m.youtube.com", "youtu.be", "youtube-nocookie.com"]),
    entry(Platform::YoutubeShorts, &["youtube.com", "m.youtube.com"]),
    entry(Platform::Vimeo, &["vimeo.com", "player.vimeo.com"]),
    entry(Platform::Dailymotion, &["dailymotion.com", "dai.ly"]),
    entry(Platform::Tiktok, &["tiktok.com", "vm.tiktok.com"]),
    entry(Platform::InstagramReels, &["instagram.com", "instagr.am"]),
    entry(Platform::Loom, &["loom.com"]),
    entry(Platform::Streamable, &["streamable.com"]),
    entry(Platform::FrameIo, &["frame.io"]),
    // Audio
    entry(Platform::YoutubeMusic, &["music.youtube.com"]),
    entry(Platform::Spotify, &["spotify.com", "spotify.link"]),
    entry(Platform::Soundcloud, &["soundcloud.com"]),
    entry(Platform::AppleMusic, &["music.apple.com"]),
    entry(Platform::ApplePodcasts, &["podcasts.apple.com"]),
    entry(Platform::AmazonMusic, &["music.amazon.com"]),
    entry(Platform::Deezer, &["deezer.com", "deezer.page.link"]),
    entry(Platform::Tidal, &["tidal.com"]),
    entry(Platform::Bandcamp, &["bandcamp.com"]),
    entry(Platform::Mixcloud, &["mixcloud.com"]),
    entry(Platform::Pandora, &["pandora.com"]),
    entry(Platform::Iheartradio, &["iheart.com"]),
    entry(Platform::Audible, &["audible.com"]),
    entry(Platform::Overcast, &["overcast.fm"]),
    entry(Platform::PocketCasts, &["pocketcasts.com", "pca.st"]),
    entry(Platform::LastFm, &["last.fm"]),
    entry(Platform::Genius, &["genius.com"]),
    entry(Platform::YandexMusic, &["music.yandex.ru", "music.yandex.com"]),
    entry(Platform::QqMusic, &["y.qq.com"]),
    // Social
    entry(Platform::Facebook, &["facebook.com", "m.facebook.com", "fb.com", "fb.watch"]),
    entry(Platform::Instagram, &["instagram.com", "instagr.am"]),
    entry(Platform::Twitter, &["twitter.com", "x.com", "t.co", "mobile.twitter.com"]),
    entry(Platform::Reddit, &["reddit.com", "old.reddit.com", "redd.it"]),
    entry(Platform::Linkedin, &["linkedin.com", "lnkd.in"]),
    entry(Platform::Pinterest, &["pinterest.com", "pin.it"]),
    entry(Platform::Tumblr, &["tumblr.com"]),
    entry(Platform::Snapchat, &["snapchat.com"]),
    entry(Platform::Threads, &["threads.net", "threads.com"]),
    entry(Platform::Bluesky, &["bsky.app"]),
    entry(Platform::Quora, &["quora.com"]),
    entry(Platform::Imgur, &["imgur.com"]),
    entry(Platform::NineGag, &["9gag.com"]),
    entry(Platform::Flickr, &["flickr.com", "flic.kr"]),
    entry(Platform::Deviantart, &["deviantart.com"]),
    entry(Platform::Behance, &["behance.net"]),
    entry(Platform::Dribbble, &["dribbble.com"]),
    entry(Platform::Medium, &["medium.com"]),
    entry(Platform::Goodreads, &["goodreads.com"]),
    entry(Platform::Wordpress, &["wordpress.com"]),
    entry(Platform::Blogger, &["blogger.com"]),
    entry(Platform::Ghost, &["ghost.org"]),
    entry(Platform::ProductHunt, &["producthunt.com"]),
    // Messaging
    entry(Platform::Whatsapp, &["whatsapp.com", "wa.me"]),
    entry(Platform::Telegram, &["telegram.org", "t.me", "telegram.me"]),
    entry(Platform::Discord, &["discord.com", "discord.gg", "discordapp.com"]),
    entry(Platform::Slack, &["slack.com"]),
    entry(Platform::Signal, &["signal.org", "signal.me"]),
    entry(Platform::Messenger, &["messenger.com", "m.me"]),
    entry(Platform::Line, &["line.me"]),
    entry(Platform::Wechat, &["wechat.com"]),
    entry(Platform::Zoom, &["zoom.us", "zoom.com"]),
    entry(Platform::GoogleMeet, &["meet.google.com"]),
    entry(Platform::MicrosoftTeams, &["teams.microsoft.com", "teams.live.com"]),
    entry(Platform::Element, &["element.io", "matrix.to"]),
    entry(Platform::Gmail, &["mail.google.com"]),
    entry(Platform::Outlook, &["outlook.com", "outlook.live.com"]),
    entry(Platform::ProtonMail, &["proton.me", "protonmail.com"]),
    // Developer
    entry(Platform::Github, &["github.com", "githubusercontent.com"]),
    entry(Platform::GithubGist, &["gist.github.com"]),
    entry(Platform::Gitlab, &["gitlab.com"]),
    entry(Platform::Bitbucket, &["bitbucket.org"]),
    entry(Platform::StackOverflow, &["stackoverflow.com"]),
    entry(Platform::StackExchange, &["stackexchange.com"]),
    entry(Platform::Npm, &["npmjs.com", "npmjs.org"]),
    entry(Platform::CratesIo, &["crates.io"]),
    entry(Platform::Pypi, &["pypi.org"]),
    entry(Platform::DockerHub, &["docker.com"]),
    entry(Platform::Codepen, &["codepen.io"]),
    entry(Platform::Codesandbox, &["codesandbox.io", "csb.app"]),
    entry(Platform::Replit, &["replit.com"]),
    entry(Platform::Glitch, &["glitch.com"]),
    entry(Platform::HackerNews, &["news.ycombinator.com"]),
    entry(Platform::DevTo, &["dev.to"]),
    entry(Platform::Kaggle, &["kaggle.com"]),
    entry(Platform::HuggingFace, &["huggingface.co", "hf.co"]),
    entry(Platform::Sourceforge, &["sourceforge.net"]),
    entry(Platform::Codeberg, &["codeberg.org"]),
    entry(Platform::Rubygems, &["rubygems.org"]),
    entry(
        Platform::MavenCentral,
        &[
            "mvnrepository.com",
            "search.maven.org",
            "central.sonatype.com",
        ],
    ),
    entry(Platform::GoPackages, &["pkg.go.dev"]),
    entry(Platform::DocsRs, &["docs.rs"]),
    entry(Platform::ReadTheDocs, &["readthedocs.io", "readthedocs.org"]),
    entry(Platform::Mdn, &["developer.mozilla.org"]),
    entry(Platform::Leetcode, &["leetcode.com"]),
    // E-commerce
    entry(
        Platform::Amazon,
        &[
            "amazon.com",
            "amazon.co.uk",
            "amazon.de",
            "amazon.fr",
            "amazon.it",
            "amazon.es",
            "amazon.ca",
            "amazon.co.jp",
            "amazon.in",
            "amazon.com.au",
            "amzn.to",
            "a.co",
        ],
    ),
    entry(
        Platform::Ebay,
        &[
            "ebay.com",
            "ebay.co.uk",
            "ebay.de",
            "ebay.com.au",
            "ebay.ca",
            "ebay.fr",
            "ebay.it",
            "ebay.es",
        ],
    ),
    entry(Platform::Etsy, &["etsy.com", "etsy.me"]),
    entry(Platform::Shopify, &["shopify.com", "shop.app"]),
    entry(Platform::Walmart, &["walmart.com"]),
    entry(Platform::Target, &["target.com"]),
    entry(Platform::BestBuy, &["bestbuy.com"]),
    entry(Platform::Aliexpress, &["aliexpress.com", "aliexpress.us"]),
    entry(Platform::Alibaba, &["alibaba.com", "1688.com"]),
    entry(Platform::Temu, &["temu.com"]),
    entry(Platform::Shein, &["shein.com"]),
    entry(
        Platform::MercadoLibre,
        &[
            "mercadolibre.com",
            "mercadolibre.com.mx",
            "mercadolibre.com.ar",
            "mercadolivre.com.br",
        ],
    ),
    entry(Platform::Rakuten, &["rakuten.com", "rakuten.co.jp"]),
    entry(Platform::Zalando, &["zalando.com", "zalando.de", "zalando.co.uk"]),
    entry(Platform::Craigslist, &["craigslist.org"]),
    entry(Platform::Apple, &["apple.com"]),
    entry(Platform::AppStore, &["apps.apple.com", "itunes.apple.com"]),
    entry(Platform::GooglePlay, &["play.google.com"]),
    entry(Platform::Bigcommerce, &["bigcommerce.com"]),
    entry(Platform::Gumroad, &["gumroad.com"]),
    // Gaming
    entry(Platform::Steam, &["steampowered.com", "steamcommunity.com"]),
    entry(Platform::EpicGames, &["epicgames.com"]),
    entry(Platform::Itchio, &["itch.io"]),
    entry(Platform::Roblox, &["roblox.com"]),
    entry(Platform::Xbox, &["xbox.com"]),
    entry(Platform::Playstation, &["playstation.com"]),
    entry(Platform::Nintendo, &["nintendo.com"]),
    entry(Platform::Gog, &["gog.com"]),
    entry(Platform::BattleNet, &["battle.net", "blizzard.com"]),
    entry(Platform::ChessCom, &["chess.com"]),
    entry(Platform::Lichess, &["lichess.org"]),
    // Financial
    entry(Platform::Paypal, &["paypal.com", "paypal.me"]),
    entry(Platform::Venmo, &["venmo.com"]),
    entry(Platform::CashApp, &["cash.app", "cash.me"]),
    entry(Platform::Stripe, &["stripe.com"]),
    entry(Platform::Wise, &["wise.com"]),
    entry(Platform::Revolut, &["revolut.com", "revolut.me"]),
    entry(Platform::Robinhood, &["robinhood.com"]),
    entry(Platform::Chase, &["chase.com"]),
    entry(Platform::BankOfAmerica, &["bankofamerica.com"]),
    entry(Platform::Klarna, &["klarna.com"]),
    entry(Platform::Square, &["squareup.com", "square.com"]),
    entry(Platform::TradingView, &["tradingview.com"]),
    entry(Platform::YahooFinance, &["finance.yahoo.com"]),
    entry(Platform::GooglePay, &["pay.google.com"]),
    // Dating
    entry(Platform::Tinder, &["tinder.com", "gotinder.com"]),
    entry(Platform::Bumble, &["bumble.com"]),
    entry(Platform::Hinge, &["hinge.co"]),
    entry(Platform::Okcupid, &["okcupid.com"]),
    entry(Platform::MatchCom, &["match.com"]),
    entry(Platform::Grindr, &["grindr.com"]),
    // Cloud
    entry(Platform::GoogleDrive, &["drive.google.com"]),
    entry(Platform::GooglePhotos, &["photos.google.com"]),
    entry(Platform::Dropbox, &["dropbox.com", "db.tt"]),
    entry(Platform::Onedrive, &["onedrive.live.com", "onedrive.com", "1drv.ms"]),
    entry(Platform::Icloud, &["icloud.com"]),
    entry(Platform::Box, &["box.com"]),
    entry(Platform::Mega, &["mega.nz", "mega.io"]),
    entry(Platform::Wetransfer, &["wetransfer.com", "we.tl"]),
    entry(Platform::Aws, &["amazonaws.com", "awsstatic.com"]),
    entry(Platform::Azure, &["azure.com", "azurewebsites.net"]),
    entry(Platform::GoogleCloud, &["cloud.google.com"]),
    entry(Platform::Cloudflare, &["cloudflare.com"]),
    entry(Platform::Firebase, &["firebase.com"]),
    entry(Platform::Netlify, &["netlify.com"]),
    entry(Platform::Vercel, &["vercel.com"]),
    entry(Platform::Heroku, &["heroku.com"]),
    entry(Platform::Render, &["render.com"]),
    entry(Platform::FlyIo, &["fly.io"]),
    entry(Platform::Supabase, &["supabase.com"]),
    // News
    entry(Platform::Cnn, &["cnn.com"]),
    entry(Platform::Bbc, &["bbc.com", "bbc.co.uk"]),
    entry(Platform::NewYorkTimes, &["nytimes.com", "nyti.ms"]),
    entry(Platform::Guardian, &["theguardian.com"]),
    entry(Platform::Reuters, &["reuters.com"]),
    entry(Platform::Bloomberg, &["bloomberg.com"]),
    entry(Platform::WallStreetJournal, &["wsj.com"]),
    entry(Platform::Npr, &["npr.org"]),
    entry(Platform::Forbes, &["forbes.com"]),
    entry(Platform::Techcrunch, &["techcrunch.com"]),
    entry(Platform::TheVerge, &["theverge.com"]),
    entry(Platform::Wired, &["wired.com"]),
    entry(Platform::ArsTechnica, &["arstechnica.com"]),
    entry(Platform::FinancialTimes, &["ft.com"]),
    entry(Platform::Yahoo, &["yahoo.com"]),
    entry(Platform::GoogleNews, &["news.google.com"]),
    // Learning
    entry(Platform::Wikipedia, &["wikipedia.org", "wikimedia.org"]),
    entry(Platform::Coursera, &["coursera.org"]),
    entry(Platform::Udemy, &["udemy.com"]),
    entry(Platform::Edx, &["edx.org"]),
    entry(Platform::KhanAcademy, &["khanacademy.org"]),
    entry(Platform::Duolingo, &["duolingo.com"]),
    entry(Platform::Ted, &["ted.com"]),
    entry(Platform::Codecademy, &["codecademy.com"]),
    entry(Platform::FreeCodeCamp, &["freecodecamp.org"]),
    entry(Platform::Arxiv, &["arxiv.org"]),
    entry(Platform::ResearchGate, &["researchgate.net"]),
    entry(Platform::GoogleScholar, &["scholar.google.com"]),
    entry(Platform::Fandom, &["fandom.com"]),
    entry(Platform::InternetArchive, &["archive.org"]),
    // Web3
    entry(Platform::Coinbase, &["coinbase.com"]),
    entry(Platform::Binance, &["binance.com", "binance.us"]),
    entry(Platform::Kraken, &["kraken.com"]),
    entry(Platform::Opensea, &["opensea.io"]),
    entry(Platform::Etherscan, &["etherscan.io"]),
    entry(Platform::Metamask, &["metamask.io"]),
    entry(Platform::Uniswap, &["uniswap.org"]),
    entry(Platform::MagicEden, &["magiceden.io"]),
    entry(Platform::Ens, &["ens.domains"]),
    entry(Platform::Coingecko, &["coingecko.com"]),
    entry(Platform::Warpcast, &["warpcast.com"]),
    // Streaming
    entry(Platform::Netflix, &["netflix.com"]),
    entry(Platform::PrimeVideo, &["primevideo.com"]),
    entry(Platform::DisneyPlus, &["disneyplus.com"]),
    entry(Platform::Hulu, &["hulu.com"]),
    entry(Platform::Max, &["max.com", "hbomax.com"]),
    entry(Platform::AppleTv, &["tv.apple.com"]),
    entry(Platform::YoutubeTv, &["tv.youtube.com"]),
    entry(Platform::ParamountPlus, &["paramountplus.com"]),
    entry(Platform::Peacock, &["peacocktv.com"]),
    entry(Platform::Crunchyroll, &["crunchyroll.com"]),
    entry(Platform::Twitch, &["twitch.tv"]),
    entry(Platform::Kick, &["kick.com"]),
    entry(Platform::Plex, &["plex.tv"]),
    entry(Platform::Roku, &["roku.com"]),
    // Maps
    entry(Platform::GoogleMaps, &["maps.google.com", "maps.app.goo.gl"]),
    entry(Platform::AppleMaps, &["maps.apple.com"]),
    entry(Platform::Waze, &["waze.com"]),
    entry(Platform::OpenStreetMap, &["openstreetmap.org", "osm.org"]),
    entry(Platform::HereWeGo, &["here.com"]),
    entry(Platform::Strava, &["strava.com"]),
    entry(Platform::Alltrails, &["alltrails.com"]),
    // Food
    entry(Platform::Doordash, &["doordash.com"]),
    entry(Platform::UberEats, &["ubereats.com"]),
    entry(Platform::Grubhub, &["grubhub.com"]),
    entry(Platform::Deliveroo, &["deliveroo.com", "deliveroo.co.uk"]),
    entry(Platform::JustEat, &["just-eat.com", "just-eat.co.uk"]),
    entry(Platform::Instacart, &["instacart.com"]),
    entry(Platform::Yelp, &["yelp.com"]),
    entry(Platform::Opentable, &["opentable.com"]),
    entry(Platform::Zomato, &["zomato.com"]),
    entry(Platform::Swiggy, &["swiggy.com"]),
    // Travel
    entry(Platform::Airbnb, &["airbnb.com", "airbnb.co.uk", "abnb.me"]),
    entry(Platform::BookingCom, &["booking.com"]),
    entry(Platform::Expedia, &["expedia.com"]),
    entry(Platform::Tripadvisor, &["tripadvisor.com", "tripadvisor.co.uk"]),
    entry(Platform::Kayak, &["kayak.com"]),
    entry(Platform::Skyscanner, &["skyscanner.com", "skyscanner.net"]),
    entry(Platform::Vrbo, &["vrbo.com"]),
    entry(Platform::Uber, &["uber.com"]),
    entry(Platform::Lyft, &["lyft.com"]),
    // Productivity
    entry(
        Platform::Google,
        &[
            "google.com",
            "google.co.uk",
            "google.de",
            "google.fr",
            "google.ca",
            "google.co.in",
            "google.com.au",
        ],
    ),
    entry(Platform::GoogleDocs, &["docs.google.com"]),
    entry(Platform::GoogleCalendar, &["calendar.google.com"]),
    entry(Platform::GoogleTranslate, &["translate.google.com"]),
    entry(Platform::Gemini, &["gemini.google.com"]),
    entry(Platform::Microsoft, &["microsoft.com"]),
    entry(
        Platform::MicrosoftOffice,
        &[
            "office.com",
            "microsoft365.com",
            "office365.com",
            "sharepoint.com",
        ],
    ),
    entry(Platform::Notion, &["notion.so", "notion.com"]),
    entry(Platform::Trello, &["trello.com"]),
    entry(Platform::Asana, &["asana.com"]),
    entry(Platform::Atlassian, &["atlassian.com"]),
    entry(Platform::Airtable, &["airtable.com"]),
    entry(Platform::Figma, &["figma.com"]),
    entry(Platform::Canva, &["canva.com"]),
    entry(Platform::Miro, &["miro.com"]),
    entry(Platform::Calendly, &["calendly.com"]),
    entry(Platform::Linear, &["linear.app"]),
    entry(Platform::Openai, &["openai.com"]),
    entry(Platform::Chatgpt, &["chatgpt.com"]),
    entry(Platform::Claude, &["claude.ai"]),
    entry(Platform::Perplexity, &["perplexity.ai"]),
    entry(Platform::Bing, &["bing.com"]),
    entry(Platform::Duckduckgo, &["duckduckgo.com"]),
    entry(Platform::Webflow, &["webflow.com"]),
    entry(Platform::Wix, &["wix.com"]),
    entry(Platform::Squarespace, &["squarespace.com"]),
    // Subscription
    entry(Platform::Patreon, &["patreon.com"]),
    entry(Platform::Onlyfans, &["onlyfans.com"]),
    entry(Platform::Substack, &["substack.com"]),
    entry(Platform::Kofi, &["ko-fi.com"]),
    entry(Platform::Buymeacoffee, &["buymeacoffee.com"]),
    entry(Platform::Kickstarter, &["kickstarter.com"]),
    entry(Platform::Indiegogo, &["indiegogo.com"]),
    entry(Platform::Gofundme, &["gofundme.com"]),
    entry(Platform::OpenCollective, &["opencollective.com"]),
    // Regional
    entry(Platform::Vk, &["vk.com", "vk.ru"]),
    entry(Platform::OkRu, &["ok.ru"]),
    entry(Platform::Weibo, &["weibo.com", "weibo.cn"]),
    entry(Platform::Douyin, &["douyin.com"]),
    entry(Platform::Bilibili, &["bilibili.com", "b23.tv"]),
    entry(Platform::Niconico, &["nicovideo.jp"]),
    entry(Platform::Naver, &["naver.com"]),
    entry(Platform::Kakao, &["kakao.com"]),
    entry(Platform::Yandex, &["yandex.ru", "yandex.com"]),
    entry(Platform::Baidu, &["baidu.com"]),
    entry(Platform::Qq, &["qq.com"]),
    entry(Platform::Zhihu, &["zhihu.com"]),
    entry(Platform::Xiaohongshu, &["xiaohongshu.com", "xhslink.com"]),
    entry(Platform::Taobao, &["taobao.com", "tmall.com"]),
    entry(Platform::JdCom, &["jd.com"]),
    entry(Platform::Flipkart, &["flipkart.com"]),
    // Alternative
    entry(
        Platform::Mastodon,
        &[
            "mastodon.social",
            "mastodon.online",
            "mstdn.social",
            "joinmastodon.org",
        ],
    ),
    entry(Platform::Lemmy, &["lemmy.world", "lemmy.ml", "join-lemmy.org"]),
    entry(Platform::Misskey, &["misskey.io"]),
    entry(Platform::Pixelfed, &["pixelfed.social", "pixelfed.org"]),
    entry(Platform::Peertube, &["joinpeertube.org", "framatube.org"]),
    entry(Platform::Gab, &["gab.com"]),
    entry(Platform::TruthSocial, &["truthsocial.com"]),
    entry(Platform::Odysee, &["odysee.com"]),
    entry(Platform::Bitchute, &["bitchute.com"]),
    entry(Platform::Rumble, &["rumble.com"]),
    entry(Platform::Nostr, &["primal.net", "snort.social", "iris.to"]),
];

/// Lowest-priority substring rules, checked in order
pub static CUSTOM_SUBDOMAIN_RULES: &[CustomSubdomainRule] = &[
    custom(Platform::Shopify, ".myshopify.com"),
    custom(Platform::Bigcommerce, ".mybigcommerce.com"),
    custom(Platform::GithubPages, ".github.io"),
    custom(Platform::GitlabPages, ".gitlab.io"),
    custom(Platform::Netlify, ".netlify.app"),
    custom(Platform::Vercel, ".vercel.app"),
    custom(Platform::Heroku, ".herokuapp.com"),
    custom(Platform::Render, ".onrender.com"),
    custom(Platform::FlyIo, ".fly.dev"),
    custom(Platform::Cloudflare, ".pages.dev"),
    custom(Platform::Cloudflare, ".workers.dev"),
    custom(Platform::Firebase, ".web.app"),
    custom(Platform::Firebase, ".firebaseapp.com"),
    custom(Platform::Supabase, ".supabase.co"),
    custom(Platform::Replit, ".repl.co"),
    custom(Platform::Glitch, ".glitch.me"),
    custom(Platform::Blogger, ".blogspot."),
    custom(Platform::Ghost, ".ghost.io"),
    custom(Platform::Wix, ".wixsite.com"),
    custom(Platform::Webflow, ".webflow.io"),
    custom(Platform::Atlassian, ".atlassian.net"),
    custom(Platform::Notion, ".notion.site"),
];

/// Returns true if the platform's generic table entry must be skipped
pub fn is_skipped(platform: Platform) -> bool {
    SKIPPED_PLATFORMS.contains(&platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::matches_domain;
    use std::collections::HashSet;

    fn generic_domains() -> Vec<(Platform, &'static str)> {
        PLATFORM_PATTERNS
            .iter()
            .filter(|entry| !is_skipped(entry.platform))
            .flat_map(|entry| entry.domains.iter().map(move |d| (entry.platform, *d)))
            .collect()
    }

    #[test]
    fn test_no_overlap_between_generic_platforms() {
        let domains = generic_domains();

        for (platform_a, domain_a) in &domains {
            for (platform_b, domain_b) in &domains {
                if platform_a == platform_b {
                    continue;
                }
                assert!(
                    !matches_domain(domain_a, domain_b),
                    "{} ({:?}) overlaps {} ({:?})",
                    domain_a,
                    platform_a,
                    domain_b,
                    platform_b
                );
            }
        }
    }

    #[test]
    fn test_each_platform_listed_once() {
        let mut seen = HashSet::new();
        for entry in PLATFORM_PATTERNS {
            assert!(seen.insert(entry.platform), "{:?} listed twice", entry.platform);
        }
    }

    #[test]
    fn test_domains_are_lowercase_without_www() {
        for entry in PLATFORM_PATTERNS {
            for domain in entry.domains {
                assert_eq!(*domain, domain.to_lowercase());
                assert!(!domain.starts_with("www."), "{}", domain);
                assert!(domain.contains('.'), "{}", domain);
            }
        }
        for rule in SPECIAL_SUBDOMAIN_RULES {
            assert_eq!(rule.host, rule.host.to_lowercase());
            assert!(!rule.host.starts_with("www."), "{}", rule.host);
        }
    }

    #[test]
    fn test_special_hosts_unique() {
        let mut seen = HashSet::new();
        for rule in SPECIAL_SUBDOMAIN_RULES {
            assert!(seen.insert(rule.host), "{} listed twice", rule.host);
        }
    }

    #[test]
    fn test_skipped_platforms_are_reachable() {
        let path_overrides = [Platform::YoutubeShorts, Platform::InstagramReels];
        let special_hosts: HashSet<&str> =
            SPECIAL_SUBDOMAIN_RULES.iter().map(|rule| rule.host).collect();

        for platform in SKIPPED_PLATFORMS {
            if path_overrides.contains(platform) {
                continue;
            }
            assert!(
                !platform.domains().is_empty(),
                "{:?} has no table entry",
                platform
            );
            for domain in platform.domains() {
                assert!(
                    special_hosts.contains(domain),
                    "{} of skipped {:?} has no special rule",
                    domain,
                    platform
                );
            }
        }
    }

    #[test]
    fn test_custom_patterns_start_with_dot() {
        for rule in CUSTOM_SUBDOMAIN_RULES {
            assert!(rule.pattern.starts_with('.'), "{}", rule.pattern);
        }
    }
}

//! In-memory mock data the client boots with.
//!
//! Nothing here is persisted; every launch starts from the same catalog.

use chrono::{Duration, Utc};

use crate::models::{
    Comment, Community, Conversation, DirectMessage, Media, MediaKind, MessageMedia, Opportunity,
    Post, PostType, User,
};

/// Account signed in by default when no session is stored.
pub const DEFAULT_USER_ID: &str = "u2";

/// Users the default account follows at startup.
pub const INITIAL_FOLLOWS: &[&str] = &["u1"];

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

fn make_user(
    id: &str,
    handle: &str,
    name: &str,
    title: &str,
    location: &str,
    bio: &str,
    user_tags: &[&str],
    followers: u32,
    following: u32,
) -> User {
    User {
        id: id.to_string(),
        handle: handle.to_string(),
        name: name.to_string(),
        avatar: format!("https://picsum.photos/seed/{}/200/200", handle),
        cover_image: format!("https://picsum.photos/seed/{}cover/1200/400", handle),
        bio: bio.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        tags: tags(user_tags),
        follower_count: followers,
        following_count: following,
    }
}

/// All seeded users, in a stable order.
pub fn users() -> Vec<User> {
    vec![
        make_user(
            "u1",
            "sato_h",
            "Sato Haruto",
            "Product Designer",
            "Tokyo",
            "日中のデザインコミュニティをつなぐ。",
            &["design", "ux", "japan"],
            1280,
            312,
        ),
        make_user(
            "u2",
            "liwei",
            "Li Wei",
            "Software Engineer",
            "Shanghai",
            "Building bridges between Shanghai and Tokyo, one commit at a time.",
            &["engineering", "rust", "japan", "startups"],
            845,
            402,
        ),
        make_user(
            "u3",
            "yui_t",
            "Tanaka Yui",
            "Translator",
            "Osaka",
            "中国語と日本語の翻訳者です。",
            &["language", "translation", "culture"],
            2210,
            150,
        ),
        make_user(
            "u4",
            "chenmei",
            "Chen Mei",
            "Venture Partner",
            "Shenzhen",
            "投资早期的跨境科技团队。",
            &["startups", "investing", "hardware"],
            5400,
            890,
        ),
    ]
}

/// Look up a seeded user by id.
pub fn user(id: &str) -> Option<User> {
    users().into_iter().find(|u| u.id == id)
}

fn seeded_user(id: &str) -> User {
    // Seed ids are fixed above; fall back to the first user to stay total.
    user(id).unwrap_or_else(|| users().remove(0))
}

fn comment(id: &str, user_id: &str, text: &str) -> Comment {
    Comment {
        id: id.to_string(),
        user: seeded_user(user_id),
        text: text.to_string(),
        translation: None,
        original_text: None,
        is_translating: false,
    }
}

/// The initial feed, newest first.
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "p1".to_string(),
            user: seeded_user("u1"),
            content: "新しいデザインシステムを公開しました！フィードバックお待ちしています。".to_string(),
            post_type: PostType::Image,
            media: vec![Media::image("https://picsum.photos/seed/p1/800/600")],
            likes: 42,
            shares: 5,
            comments: vec![comment("c1", "u3", "素晴らしいですね！"), comment("c2", "u2", "Looks great, congrats!")],
            created_at: "2h".to_string(),
            viewers: None,
            was_live: false,
            liked: false,
        },
        Post {
            id: "p2".to_string(),
            user: seeded_user("u4"),
            content: "Live from the Shenzhen hardware meetup.".to_string(),
            post_type: PostType::Live,
            media: vec![Media::image("https://picsum.photos/seed/p2/800/450")],
            likes: 120,
            shares: 18,
            comments: Vec::new(),
            created_at: "Now".to_string(),
            viewers: Some(1342),
            was_live: false,
            liked: false,
        },
        Post {
            id: "p3".to_string(),
            user: seeded_user("u3"),
            content: "大阪の週末。Weekend in Osaka.".to_string(),
            post_type: PostType::Image,
            media: (1..=5)
                .map(|i| Media::image(format!("https://picsum.photos/seed/p3-{}/600/600", i)))
                .collect(),
            likes: 310,
            shares: 22,
            comments: vec![comment("c3", "u1", "いい写真！")],
            created_at: "5h".to_string(),
            viewers: None,
            was_live: false,
            liked: false,
        },
        Post {
            id: "p4".to_string(),
            user: seeded_user("u2"),
            content: "Shipped our first Rust service to production today.".to_string(),
            post_type: PostType::Text,
            media: Vec::new(),
            likes: 0,
            shares: 0,
            comments: Vec::new(),
            created_at: "1d".to_string(),
            viewers: None,
            was_live: false,
            liked: false,
        },
        Post {
            id: "p5".to_string(),
            user: seeded_user("u1"),
            content: "Replay of yesterday's design critique session.".to_string(),
            post_type: PostType::Video,
            media: vec![Media::video("https://picsum.photos/seed/p5/800/450")],
            likes: 88,
            shares: 9,
            comments: Vec::new(),
            created_at: "2d".to_string(),
            viewers: None,
            was_live: true,
            liked: false,
        },
    ]
}

fn dm(id: &str, sender: &str, text: &str, minutes_ago: i64) -> DirectMessage {
    DirectMessage {
        id: id.to_string(),
        sender_id: sender.to_string(),
        text: text.to_string(),
        media: None,
        timestamp: (Utc::now() - Duration::minutes(minutes_ago)).timestamp_millis(),
    }
}

/// Conversations of the default account, in arbitrary order.
pub fn conversations() -> Vec<Conversation> {
    let me = seeded_user(DEFAULT_USER_ID);
    let mut photo = dm("dm5", "u4", "", 60 * 30);
    photo.media = Some(MessageMedia {
        kind: MediaKind::Image,
        url: "https://picsum.photos/seed/dm5/400/300".to_string(),
    });

    vec![
        Conversation {
            id: "conv2".to_string(),
            participants: [me.clone(), seeded_user("u3")],
            messages: vec![dm("dm3", "u3", "翻訳の件、確認しました。", 180)],
            unread_count: 0,
        },
        Conversation {
            id: "conv1".to_string(),
            participants: [me.clone(), seeded_user("u1")],
            messages: vec![
                dm("dm1", "u1", "来週東京に来ますか？", 20),
                dm("dm2", "u2", "Yes, landing on Tuesday!", 15),
            ],
            unread_count: 2,
        },
        Conversation {
            id: "conv3".to_string(),
            participants: [me, seeded_user("u4")],
            messages: vec![dm("dm4", "u4", "Let's catch up about the seed round.", 60 * 31), photo],
            unread_count: 1,
        },
    ]
}

/// Community catalog, oldest first.
pub fn communities() -> Vec<Community> {
    vec![
        Community {
            id: "cm1".to_string(),
            name: "Tokyo Design Guild".to_string(),
            description: "Designers working across Japan and China.".to_string(),
            member_count: 1200,
            members: vec![seeded_user("u1"), seeded_user("u3")],
            tags: tags(&["design", "ux"]),
            latest_post_preview: Some("Critique night this Friday!".to_string()),
        },
        Community {
            id: "cm2".to_string(),
            name: "Rust in Asia".to_string(),
            description: "Rustaceans from Shanghai to Sapporo.".to_string(),
            member_count: 860,
            members: vec![seeded_user("u2")],
            tags: tags(&["engineering", "rust"]),
            latest_post_preview: None,
        },
        Community {
            id: "cm3".to_string(),
            name: "Cross-border Founders".to_string(),
            description: "Founders building between two markets.".to_string(),
            member_count: 3400,
            members: vec![seeded_user("u4"), seeded_user("u2")],
            tags: tags(&["startups", "investing"]),
            latest_post_preview: Some("Demo day applications are open.".to_string()),
        },
        Community {
            id: "cm4".to_string(),
            name: "日中翻訳サークル".to_string(),
            description: "Translators sharing glossaries and tips.".to_string(),
            member_count: 540,
            members: vec![seeded_user("u3")],
            tags: tags(&["language", "translation"]),
            latest_post_preview: None,
        },
    ]
}

/// Opportunity catalog.
pub fn opportunities() -> Vec<Opportunity> {
    vec![
        Opportunity {
            id: "op1".to_string(),
            title: "Senior Rust Engineer".to_string(),
            organization: "Kumo Labs".to_string(),
            location: "Tokyo / Remote".to_string(),
            kind: "Full-time".to_string(),
            tags: tags(&["engineering", "rust"]),
        },
        Opportunity {
            id: "op2".to_string(),
            title: "UX Researcher".to_string(),
            organization: "Lantern Studio".to_string(),
            location: "Shanghai".to_string(),
            kind: "Contract".to_string(),
            tags: tags(&["design", "ux"]),
        },
        Opportunity {
            id: "op3".to_string(),
            title: "Founding Partner".to_string(),
            organization: "Bridge Ventures".to_string(),
            location: "Shenzhen".to_string(),
            kind: "Partnership".to_string(),
            tags: tags(&["startups", "investing"]),
        },
    ]
}

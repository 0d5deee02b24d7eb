use mapjoin::{from_iterable, join, inner_join, left_outer_join, CollisionPolicy, JoinType, KeyedMap};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
#[allow(unused)]
struct User {
    id: u64,
    name: String,
}
#[derive(Debug, Clone)]
#[allow(unused)]
struct Post {
    id: u64,
    user_id: u64,
    content: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let users = from_iterable(
        (0..10).map(|id| User { id, name: format!("user{id}") }),
        |user, _| user.id,
        CollisionPolicy::Reject,
    )?;
    // latest post per user; users 7 to 9 never posted, user 42 does not exist
    let posts: KeyedMap<u64, Post> = from_iterable(
        (0..30).filter(|n| n % 4 != 0)
            .map(|id| Post { id, user_id: id % 7, content: format!("post {id}") })
            .chain(Some(Post { id: 99, user_id: 42, content: "orphan".to_string() })),
        |post, _| post.user_id,
        CollisionPolicy::Override,
    )?;

    for line in inner_join(&users, &posts, |user, post, _| format!("{} last wrote {:?}", user.name, post.content)) {
        println!("{line}");
    }
    for name in left_outer_join(&users, &posts, |user, _| &user.name) {
        println!("{name} never posted");
    }

    let kind = std::env::args().nth(1).unwrap_or_else(|| JoinType::RightOuter.to_string());
    let orphans: Vec<_> = join(&users, &posts, kind.as_str(), |pair, id| (*id, pair.is_both()))?.collect();
    println!("{kind}: {orphans:?}");

    Ok(())
}

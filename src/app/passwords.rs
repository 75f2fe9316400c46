use tokio::task;

/// bcrypt work factor applied to every stored password.
pub const HASH_COST: u32 = 10;

/// Hashes `password` with a fresh random salt.
pub async fn hash_password(password: &str) -> anyhow::Result<String> {
    let password = password.to_string();

    let hash = task::spawn_blocking(move || bcrypt::hash(password, HASH_COST)).await??;

    Ok(hash)
}

pub async fn verify_password(password: &str, hash: &str) -> anyhow::Result<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    let matches = task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

    Ok(matches)
}

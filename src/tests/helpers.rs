#![cfg(test)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use sqlx::PgPool;
use uuid::Uuid;

pub const MULTIPART_BOUNDARY: &str = "X-TEST-BOUNDARY";

pub fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let pixels = RgbImage::from_fn(width, height, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]));
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(pixels)
        .write_to(&mut cursor, format)
        .expect("encode test image");
    cursor.into_inner()
}

pub fn write_image(dir: &Path, name: &str, width: u32, height: u32, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_image(width, height, format)).expect("write test image");
    path
}

/// Text fields are `(name, None, value)`, files `(name, Some(file_name), bytes)`.
pub fn multipart_body(fields: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        match file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes());
            }
        }
        body.extend_from_slice(value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

pub fn unique_credentials() -> (String, String) {
    let id = Uuid::now_v7().as_simple().to_string();
    let username = format!("t_{}", &id[..16]);
    let email = format!("{}@test.example", &id[..16]);

    (username, email)
}

pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Option<Uuid> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
        .expect("find user by email")
}

pub async fn delete_user(pool: &PgPool, user_id: Uuid) {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await
        .expect("delete user");
}

pub async fn insert_user_with_profile(pool: &PgPool, username: &str, email: &str, image: &str) -> Uuid {
    let user_id = Uuid::now_v7();
    sqlx::query("INSERT INTO users (id, username, email, password) VALUES ($1, $2, $3, 'hashed')")
        .bind(user_id)
        .bind(username)
        .bind(email)
        .execute(pool)
        .await
        .expect("insert user");
    sqlx::query("INSERT INTO profiles (id, user_id, bio, image) VALUES ($1, $2, 'bio', $3)")
        .bind(Uuid::now_v7())
        .bind(user_id)
        .bind(image)
        .execute(pool)
        .await
        .expect("insert profile");
    user_id
}

pub async fn find_profile_image(pool: &PgPool, user_id: Uuid) -> Option<String> {
    sqlx::query_scalar::<_, String>("SELECT image FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .expect("find profile image")
}

pub async fn insert_question(pool: &PgPool, user_id: Uuid, title: &str) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO questions (id, user_id, title, content) VALUES ($1, $2, $3, 'content') RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(title)
    .fetch_one(pool)
    .await
    .expect("insert question")
}

pub async fn like_question(pool: &PgPool, question_id: Uuid, user_id: Uuid) {
    sqlx::query("INSERT INTO question_likes (question_id, user_id) VALUES ($1, $2)")
        .bind(question_id)
        .bind(user_id)
        .execute(pool)
        .await
        .expect("like question");
}

pub async fn insert_comment(pool: &PgPool, question_id: Uuid, name: &str, created_at: DateTime<Utc>) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO comments (id, question_id, name, content, created_at) VALUES ($1, $2, $3, 'nice question', $4) RETURNING id",
    )
    .bind(Uuid::now_v7())
    .bind(question_id)
    .bind(name)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("insert comment")
}

pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = http_body_util::BodyExt::collect(response.into_body())
        .await
        .expect("read response body")
        .to_bytes();
    serde_json::from_slice(&body).expect("response is json")
}

pub fn profile_pic_files(media_root: &Path) -> Vec<String> {
    let mut files: Vec<String> = std::fs::read_dir(media_root.join("profile_pic"))
        .expect("read profile_pic dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    files
}

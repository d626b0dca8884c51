use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct GetMediaFileDTO {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct MediaFileDTO {
    pub data: Bytes,
    pub content_type: String,
}

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AdminError;
use crate::form::EntityForm;
use crate::project::Projectable;
use crate::store::{Collection, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AdminError> {
        match value {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            "archived" => Ok(PostStatus::Archived),
            other => Err(AdminError::validation(
                "status",
                &format!("unknown post status '{}'", other),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub publish_date: NaiveDate,
    pub status: PostStatus,
    pub meta_title: String,
    pub meta_description: String,
}

impl Record for Post {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Projectable for Post {
    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.excerpt]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub publish_date: NaiveDate,
    pub status: PostStatus,
    pub meta_title: String,
    pub meta_description: String,
}

impl EntityForm for PostForm {
    type Entity = Post;

    fn default_for(_collection: &Collection<Post>) -> Self {
        PostForm {
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            publish_date: Utc::now().date_naive(),
            status: PostStatus::Draft,
            meta_title: String::new(),
            meta_description: String::new(),
        }
    }

    fn from_record(post: &Post) -> Self {
        PostForm {
            title: post.title.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            publish_date: post.publish_date,
            status: post.status,
            meta_title: post.meta_title.clone(),
            meta_description: post.meta_description.clone(),
        }
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.title.trim().is_empty() {
            return Err(AdminError::validation("title", "title is required"));
        }
        Ok(())
    }

    fn build(&self, id: String) -> Post {
        Post {
            id,
            title: self.title.clone(),
            content: self.content.clone(),
            excerpt: self.excerpt.clone(),
            featured_image: None,
            publish_date: self.publish_date,
            status: self.status,
            meta_title: self.meta_title.clone(),
            meta_description: self.meta_description.clone(),
        }
    }

    fn apply_to(&self, post: &mut Post) {
        post.title = self.title.clone();
        post.content = self.content.clone();
        post.excerpt = self.excerpt.clone();
        post.publish_date = self.publish_date;
        post.status = self.status;
        post.meta_title = self.meta_title.clone();
        post.meta_description = self.meta_description.clone();
        // featured_image untouched: managed by the upload flow
    }
}

/// Direct status change from the list screen, bypassing the form.
pub fn set_status(
    posts: &mut Collection<Post>,
    id: &str,
    status: PostStatus,
) -> Result<(), AdminError> {
    posts.update_with(id, |post| post.status = status)
}

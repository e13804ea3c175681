use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::{TimeDelta, TimeZone, Utc};
use uuid::Uuid;

use crate::admin::application::domain::{BlogPostRecord, ProjectRecord};
use crate::admin::application::ports::outgoing::{ContentWriter, ContentWriterError};
use crate::admin::application::services::{EditingContext, NotificationCenter};
use crate::auth::application::domain::AdminAccount;
use crate::auth::application::ports::outgoing::{
    AdminAccounts, AdminAccountsError, RevocationError, SessionRevocation,
};
use crate::content::application::domain::defaults::DefaultContentBundle;
use crate::content::application::domain::entities::{BlogPost, Profile, Project};
use crate::content::application::ports::outgoing::{ContentQuery, ContentQueryError};
use crate::content::application::services::ContentRepository;
use crate::inbox::application::domain::{ContactMessage, NewContactMessage};
use crate::inbox::application::ports::outgoing::{MessageStore, MessageStoreError};

//
// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct ContentState {
    profile: Option<Profile>,
    projects: BTreeMap<i64, Project>,
    blog_posts: BTreeMap<i64, BlogPost>,
    next_project_id: i64,
    next_blog_post_id: i64,
    last_project_write: Option<ProjectRecord>,
    last_assigned_project_id: i64,
    write_error: Option<String>,
    hang_writes: bool,
}

impl ContentState {
    fn assign_project_id(&mut self) -> i64 {
        self.next_project_id = self.next_project_id.max(self.max_project_id()) + 1;
        self.next_project_id
    }

    fn assign_blog_post_id(&mut self) -> i64 {
        let max = self.blog_posts.keys().next_back().copied().unwrap_or(0);
        self.next_blog_post_id = self.next_blog_post_id.max(max) + 1;
        self.next_blog_post_id
    }

    fn max_project_id(&self) -> i64 {
        self.projects.keys().next_back().copied().unwrap_or(0)
    }
}

/// Content store backed by maps. Reads and writes are counted; writes can be
/// made to fail or hang.
#[derive(Clone)]
pub struct InMemoryContentStore {
    configured: bool,
    state: Arc<Mutex<ContentState>>,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            configured: true,
            state: Arc::new(Mutex::new(ContentState::default())),
            reads: Arc::new(AtomicUsize::new(0)),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Repository over this store with the built-in defaults, a fresh
    /// notification center and a one second write deadline.
    pub fn editing_context(&self) -> EditingContext {
        let content = Arc::new(ContentRepository::new(
            Arc::new(self.clone()),
            DefaultContentBundle::builtin(),
            Duration::from_secs(1),
        ));
        EditingContext::new(
            content,
            Arc::new(NotificationCenter::default()),
            Duration::from_secs(1),
        )
    }

    pub fn sample_project(id: i64, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            long_description: None,
            image: "https://example.com/shot.png".to_string(),
            gallery: Vec::new(),
            tags: vec!["Rust".to_string()],
            features: Vec::new(),
            demo_url: "#".to_string(),
            github_url: "#".to_string(),
            case_study_url: None,
        }
    }

    pub fn sample_post(id: i64, date: &str) -> BlogPost {
        BlogPost {
            id,
            title: format!("Post {id}"),
            excerpt: "Excerpt".to_string(),
            date: date.to_string(),
            read_time: "3 min read".to_string(),
            slug: format!("post-{id}"),
            link: None,
        }
    }

    pub fn put_project(&self, project: Project) {
        self.lock().projects.insert(project.id, project);
    }

    pub fn put_blog_post(&self, post: BlogPost) {
        self.lock().blog_posts.insert(post.id, post);
    }

    pub fn fail_writes_with(&self, message: &str) {
        self.lock().write_error = Some(message.to_string());
    }

    pub fn hang_writes(&self) {
        self.lock().hang_writes = true;
    }

    pub fn profile(&self) -> Option<Profile> {
        self.lock().profile.clone()
    }

    pub fn project_ids(&self) -> Vec<i64> {
        self.lock().projects.keys().copied().collect()
    }

    pub fn blog_post_ids(&self) -> Vec<i64> {
        self.lock().blog_posts.keys().copied().collect()
    }

    pub fn last_project_write(&self) -> Option<ProjectRecord> {
        self.lock().last_project_write.clone()
    }

    pub fn last_assigned_project_id(&self) -> i64 {
        self.lock().last_assigned_project_id
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ContentState> {
        self.state.lock().unwrap()
    }

    fn read(&self) -> Result<(), ContentQueryError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.configured {
            Ok(())
        } else {
            Err(ContentQueryError::NotConfigured)
        }
    }

    /// Counts the write, then hangs or fails it when told to.
    async fn begin_write(&self) -> Result<(), ContentWriterError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if !self.configured {
            return Err(ContentWriterError::NotConfigured);
        }
        let (hang, error) = {
            let state = self.lock();
            (state.hang_writes, state.write_error.clone())
        };
        if hang {
            futures::future::pending::<()>().await;
        }
        match error {
            Some(message) => Err(ContentWriterError::DatabaseError(message)),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentQuery for InMemoryContentStore {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn fetch_profile(&self) -> Result<Option<Profile>, ContentQueryError> {
        self.read()?;
        Ok(self.lock().profile.clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        self.read()?;
        Ok(self.lock().projects.values().cloned().collect())
    }

    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, ContentQueryError> {
        self.read()?;
        Ok(self.lock().blog_posts.values().rev().cloned().collect())
    }
}

#[async_trait]
impl ContentWriter for InMemoryContentStore {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), ContentWriterError> {
        self.begin_write().await?;
        self.lock().profile = Some(profile.clone());
        Ok(())
    }

    async fn upsert_project(&self, record: ProjectRecord) -> Result<Project, ContentWriterError> {
        self.begin_write().await?;
        let mut state = self.lock();
        state.last_project_write = Some(record.clone());

        let id = match record.id {
            Some(id) if state.projects.contains_key(&id) => id,
            Some(_) => return Err(ContentWriterError::NotFound),
            None => {
                let id = state.assign_project_id();
                state.last_assigned_project_id = id;
                id
            }
        };

        let project = Project {
            id,
            title: record.title,
            description: record.description,
            long_description: record.long_description,
            image: record.image,
            gallery: record.gallery,
            tags: record.tags,
            features: record.features,
            demo_url: record.demo_url,
            github_url: record.github_url,
            case_study_url: record.case_study_url,
        };
        state.projects.insert(id, project.clone());
        Ok(project)
    }

    async fn delete_project(&self, id: i64) -> Result<(), ContentWriterError> {
        self.begin_write().await?;
        self.lock()
            .projects
            .remove(&id)
            .map(|_| ())
            .ok_or(ContentWriterError::NotFound)
    }

    async fn upsert_blog_post(
        &self,
        record: BlogPostRecord,
    ) -> Result<BlogPost, ContentWriterError> {
        self.begin_write().await?;
        let mut state = self.lock();

        let id = match record.id {
            Some(id) if state.blog_posts.contains_key(&id) => id,
            Some(_) => return Err(ContentWriterError::NotFound),
            None => state.assign_blog_post_id(),
        };

        let post = BlogPost {
            id,
            title: record.title,
            excerpt: record.excerpt,
            date: record.date,
            read_time: record.read_time,
            slug: record.slug,
            link: record.link,
        };
        state.blog_posts.insert(id, post.clone());
        Ok(post)
    }

    async fn delete_blog_post(&self, id: i64) -> Result<(), ContentWriterError> {
        self.begin_write().await?;
        self.lock()
            .blog_posts
            .remove(&id)
            .map(|_| ())
            .ok_or(ContentWriterError::NotFound)
    }

    async fn replace_content(
        &self,
        projects: &[Project],
        blog_posts: &[BlogPost],
    ) -> Result<(), ContentWriterError> {
        self.begin_write().await?;
        let mut state = self.lock();
        state.projects = projects.iter().map(|p| (p.id, p.clone())).collect();
        state.blog_posts = blog_posts.iter().map(|p| (p.id, p.clone())).collect();
        state.next_project_id = state.max_project_id();
        state.next_blog_post_id = state.blog_posts.keys().next_back().copied().unwrap_or(0);
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Inbox
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct MessageState {
    messages: BTreeMap<i64, ContactMessage>,
    next_id: i64,
    error: Option<String>,
    mark_read_calls: usize,
}

impl MessageState {
    fn push(&mut self, message: NewContactMessage, is_read: bool) -> ContactMessage {
        self.next_id += 1;
        let id = self.next_id;
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let stored = ContactMessage {
            id,
            created_at: base + TimeDelta::minutes(id),
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            is_read,
        };
        self.messages.insert(id, stored.clone());
        stored
    }
}

#[derive(Clone)]
pub struct InMemoryMessageStore {
    configured: bool,
    state: Arc<Mutex<MessageState>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self {
            configured: true,
            state: Arc::new(Mutex::new(MessageState::default())),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    /// Stores a message directly. Later calls get later timestamps.
    pub fn put(&self, subject: &str, is_read: bool) -> i64 {
        let message = NewContactMessage {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            subject: subject.to_string(),
            message: "Hello there".to_string(),
        };
        self.lock().push(message, is_read).id
    }

    pub fn ids(&self) -> Vec<i64> {
        self.lock().messages.keys().copied().collect()
    }

    /// Every following store call fails with `message`.
    pub fn fail_with(&self, message: &str) {
        self.lock().error = Some(message.to_string());
    }

    pub fn mark_read_calls(&self) -> usize {
        self.lock().mark_read_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MessageState> {
        self.state.lock().unwrap()
    }

    fn check(&self) -> Result<std::sync::MutexGuard<'_, MessageState>, MessageStoreError> {
        if !self.configured {
            return Err(MessageStoreError::NotConfigured);
        }
        let state = self.lock();
        match &state.error {
            Some(message) => Err(MessageStoreError::DatabaseError(message.clone())),
            None => Ok(state),
        }
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, MessageStoreError> {
        Ok(self.check()?.push(message, false))
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, MessageStoreError> {
        let state = self.check()?;
        let mut messages: Vec<ContactMessage> = state.messages.values().cloned().collect();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(messages)
    }

    async fn find(&self, id: i64) -> Result<Option<ContactMessage>, MessageStoreError> {
        Ok(self.check()?.messages.get(&id).cloned())
    }

    async fn mark_read(&self, id: i64) -> Result<(), MessageStoreError> {
        let mut state = self.check()?;
        state.mark_read_calls += 1;
        match state.messages.get_mut(&id) {
            Some(message) => {
                message.is_read = true;
                Ok(())
            }
            None => Err(MessageStoreError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), MessageStoreError> {
        self.check()?
            .messages
            .remove(&id)
            .map(|_| ())
            .ok_or(MessageStoreError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, Default)]
pub struct InMemoryAdminAccounts {
    accounts: Arc<Mutex<HashMap<String, AdminAccount>>>,
}

#[async_trait]
impl AdminAccounts for InMemoryAdminAccounts {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>, AdminAccountsError> {
        Ok(self.accounts.lock().unwrap().get(email).cloned())
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<AdminAccount, AdminAccountsError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AdminAccountsError::AlreadyExists);
        }
        let account = AdminAccount {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        accounts.insert(email.to_string(), account.clone());
        Ok(account)
    }
}

/// Revocation list keyed by token hash, remembering the TTL each entry got.
#[derive(Clone, Default)]
pub struct InMemorySessionRevocation {
    revoked: Arc<Mutex<HashMap<String, u64>>>,
}

impl InMemorySessionRevocation {
    pub fn ttl_of(&self, token_hash: &str) -> Option<u64> {
        self.revoked.lock().unwrap().get(token_hash).copied()
    }

    pub fn revoked_count(&self) -> usize {
        self.revoked.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionRevocation for InMemorySessionRevocation {
    async fn revoke(&self, token_hash: &str, ttl_secs: u64) -> Result<(), RevocationError> {
        self.revoked
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), ttl_secs);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, RevocationError> {
        Ok(self.revoked.lock().unwrap().contains_key(token_hash))
    }
}

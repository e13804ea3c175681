use std::{future::Future, sync::Arc, time::Duration};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::{
    content::application::{
        domain::{
            defaults::DefaultContentBundle,
            entities::{sort_newest_first, BlogPost, Profile, Project},
        },
        ports::outgoing::{ContentQuery, ContentQueryError},
    },
    shared::deadline::{with_deadline, StoreCallError},
};

//
// ──────────────────────────────────────────────────────────
// Read model
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
}

impl PortfolioView {
    fn from_defaults(defaults: &DefaultContentBundle) -> Self {
        Self {
            profile: defaults.profile.clone(),
            projects: defaults.projects.clone(),
            blog_posts: defaults.blog_posts.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Uninitialized,
    Loading,
    Ready,
}

/// Where a slice of the current view came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SliceSource {
    Defaults,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SliceSources {
    pub profile: SliceSource,
    pub projects: SliceSource,
    pub blog_posts: SliceSource,
}

impl SliceSources {
    fn all_defaults() -> Self {
        Self {
            profile: SliceSource::Defaults,
            projects: SliceSource::Defaults,
            blog_posts: SliceSource::Defaults,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    pub view: Arc<PortfolioView>,
    pub phase: LoadPhase,
    pub loading: bool,
    pub configured: bool,
    pub sources: SliceSources,
}

struct RepositoryState {
    view: Arc<PortfolioView>,
    sources: SliceSources,
    configured: bool,
    loaded_once: bool,
    pending_loads: usize,
    /// Handed out when a load starts.
    started_loads: u64,
    /// Start number of the load whose result is in `view`.
    applied_load: u64,
}

impl RepositoryState {
    fn phase(&self) -> LoadPhase {
        if self.pending_loads > 0 {
            LoadPhase::Loading
        } else if self.loaded_once {
            LoadPhase::Ready
        } else {
            LoadPhase::Uninitialized
        }
    }

    fn snapshot(&self) -> ContentSnapshot {
        let phase = self.phase();
        ContentSnapshot {
            view: Arc::clone(&self.view),
            phase,
            loading: phase != LoadPhase::Ready,
            configured: self.configured,
            sources: self.sources,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────
//

/// The one materialized view of public content.
///
/// Built once at start-up and shared by `Arc`. Only `load` (and its alias
/// `refresh`) replaces the view; readers always get a complete snapshot. Each
/// slice falls back to the built-in bundle on its own when its read fails,
/// times out, or comes back empty. Read errors are logged, never returned.
pub struct ContentRepository {
    query: Arc<dyn ContentQuery>,
    defaults: DefaultContentBundle,
    read_timeout: Duration,
    state: RwLock<RepositoryState>,
}

impl ContentRepository {
    pub fn new(
        query: Arc<dyn ContentQuery>,
        defaults: DefaultContentBundle,
        read_timeout: Duration,
    ) -> Self {
        let state = RepositoryState {
            view: Arc::new(PortfolioView::from_defaults(&defaults)),
            sources: SliceSources::all_defaults(),
            configured: query.is_configured(),
            loaded_once: false,
            pending_loads: 0,
            started_loads: 0,
            applied_load: 0,
        };

        Self {
            query,
            defaults,
            read_timeout,
            state: RwLock::new(state),
        }
    }

    pub fn defaults(&self) -> &DefaultContentBundle {
        &self.defaults
    }

    pub async fn current(&self) -> ContentSnapshot {
        self.state.read().await.snapshot()
    }

    /// Re-reads every slice. Called once after each successful admin write.
    pub async fn refresh(&self) -> ContentSnapshot {
        self.load().await
    }

    /// Overlapping loads may finish in any order; a result is applied only
    /// when no later-started load has already been applied.
    pub async fn load(&self) -> ContentSnapshot {
        let generation = {
            let mut state = self.state.write().await;
            state.pending_loads += 1;
            state.started_loads += 1;
            state.started_loads
        };

        let configured = self.query.is_configured();
        let (view, sources) = if configured {
            self.read_slices().await
        } else {
            info!("Content store not configured, serving built-in content");
            (
                PortfolioView::from_defaults(&self.defaults),
                SliceSources::all_defaults(),
            )
        };

        let mut state = self.state.write().await;
        if generation > state.applied_load {
            state.view = Arc::new(view);
            state.sources = sources;
            state.configured = configured;
            state.loaded_once = true;
            state.applied_load = generation;
        } else {
            debug!(
                generation,
                applied = state.applied_load,
                "Discarding content load overtaken by a newer one"
            );
        }
        state.pending_loads = state.pending_loads.saturating_sub(1);
        state.snapshot()
    }

    async fn read_slices(&self) -> (PortfolioView, SliceSources) {
        let (profile, projects, blog_posts) = futures::join!(
            self.read_slice("profile", self.query.fetch_profile()),
            self.read_slice("projects", self.query.list_projects()),
            self.read_slice("blog posts", self.query.list_blog_posts()),
        );

        let (profile, profile_source) = match profile.flatten() {
            Some(profile) => (profile, SliceSource::Remote),
            None => {
                debug!("No stored profile, keeping built-in profile");
                (self.defaults.profile.clone(), SliceSource::Defaults)
            }
        };

        let (projects, projects_source) = match projects {
            Some(projects) if !projects.is_empty() => (projects, SliceSource::Remote),
            _ => {
                debug!("No stored projects, keeping built-in projects");
                (self.defaults.projects.clone(), SliceSource::Defaults)
            }
        };

        let (blog_posts, blog_posts_source) = match blog_posts {
            Some(mut posts) if !posts.is_empty() => {
                sort_newest_first(&mut posts);
                (posts, SliceSource::Remote)
            }
            _ => {
                debug!("No stored blog posts, keeping built-in posts");
                (self.defaults.blog_posts.clone(), SliceSource::Defaults)
            }
        };

        (
            PortfolioView {
                profile,
                projects,
                blog_posts,
            },
            SliceSources {
                profile: profile_source,
                projects: projects_source,
                blog_posts: blog_posts_source,
            },
        )
    }

    async fn read_slice<T, F>(&self, slice: &'static str, read: F) -> Option<T>
    where
        F: Future<Output = Result<T, ContentQueryError>>,
    {
        match with_deadline(self.read_timeout, read).await {
            Ok(value) => Some(value),
            Err(StoreCallError::Store(err)) => {
                warn!(slice, error = %err, "Content read failed, using built-in content");
                None
            }
            Err(StoreCallError::TimedOut(limit)) => {
                warn!(
                    slice,
                    timeout_ms = limit.as_millis() as u64,
                    "Content read timed out, using built-in content"
                );
                None
            }
        }
    }
}

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use artist_api::{
    model::{
        artist::{ArtistId, timestamp_to_date_time},
        error::{ArtistError, ArtistErrorReason},
    },
    v1::{
        Artist, CreateArtistRequest, DeleteArtistRequest, GetArtistRequest, ListArtistsRequest,
        Metadata, UpdateArtistRequest, artist_service_server::ArtistService,
    },
};
use artist_service::{
    artist::{
        adapter::ArtistAdapter,
        notifier::memory::MemoryArtistNotifier,
        observer::{ArtistEvent, MemoryArtistObserver},
        repository::{
            ArtistRecord, ArtistRecordList, ArtistRepository, memory::MemoryArtistRepository,
        },
        stamper::FixedMetadataStamper,
    },
    config::PaginationConfig,
    create_artist_service,
    error::{AppError, AppResult},
};
use async_trait::async_trait;
use time::{OffsetDateTime, macros::datetime};
use tonic::{Code, Request, Status};

const CREATED_AT: OffsetDateTime = datetime!(2024-03-01 10:00 UTC);
const UPDATED_AT: OffsetDateTime = datetime!(2024-03-02 18:30 UTC);

/// Counts writes and can be told to reject them.
#[derive(Debug, Default)]
struct InstrumentedRepository {
    inner: MemoryArtistRepository,
    puts: AtomicUsize,
    failing_puts: AtomicBool,
}

#[async_trait]
impl ArtistRepository for InstrumentedRepository {
    async fn list_artists(&self, limit: i32, cursor: &str) -> AppResult<ArtistRecordList> {
        self.inner.list_artists(limit, cursor).await
    }

    async fn get_artist(&self, id: &ArtistId) -> AppResult<Option<ArtistRecord>> {
        self.inner.get_artist(id).await
    }

    async fn put_artist(&self, record: ArtistRecord) -> AppResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.failing_puts.load(Ordering::SeqCst) {
            return Err(AppError::Storage("store is read-only".into()));
        }
        self.inner.put_artist(record).await
    }

    async fn delete_artist(&self, id: &ArtistId) -> AppResult<()> {
        self.inner.delete_artist(id).await
    }
}

struct Fixture {
    adapter: ArtistAdapter,
    repository: Arc<InstrumentedRepository>,
    notifier: Arc<MemoryArtistNotifier>,
    observer: Arc<MemoryArtistObserver>,
}

impl Fixture {
    fn new() -> Self {
        Self::build(Arc::new(InstrumentedRepository::default()), CREATED_AT)
    }

    fn build(repository: Arc<InstrumentedRepository>, now: OffsetDateTime) -> Self {
        let notifier = Arc::new(MemoryArtistNotifier::new());
        let observer = Arc::new(MemoryArtistObserver::new());
        let adapter = create_artist_service(
            repository.clone(),
            notifier.clone(),
            Arc::new(FixedMetadataStamper(now)),
            observer.clone(),
        );
        Fixture {
            adapter,
            repository,
            notifier,
            observer,
        }
    }

    /// Same store, later clock.
    fn at(&self, now: OffsetDateTime) -> Self {
        Self::build(self.repository.clone(), now)
    }

    fn puts(&self) -> usize {
        self.repository.puts.load(Ordering::SeqCst)
    }

    async fn create(&self, name: &str, image: &str) -> Result<Artist, Status> {
        self.adapter
            .create_artist(Request::new(CreateArtistRequest {
                artist: Some(Artist {
                    name: name.into(),
                    image: image.into(),
                    ..Default::default()
                }),
            }))
            .await
            .map(|response| response.into_inner())
    }

    async fn get(&self, id: &str) -> Result<Artist, Status> {
        self.adapter
            .get_artist(Request::new(GetArtistRequest { id: id.into() }))
            .await
            .map(|response| response.into_inner())
    }

    async fn update(&self, artist: Artist) -> Result<Artist, Status> {
        self.adapter
            .update_artist(Request::new(UpdateArtistRequest {
                artist: Some(artist),
            }))
            .await
            .map(|response| response.into_inner())
    }

    async fn delete(&self, id: &str) -> Result<(), Status> {
        self.adapter
            .delete_artist(Request::new(DeleteArtistRequest { id: id.into() }))
            .await
            .map(|response| response.into_inner())
    }
}

fn reason(status: &Status) -> Option<ArtistErrorReason> {
    ArtistError::from_status(status).map(|err| err.reason)
}

fn created_at(artist: &Artist) -> Option<OffsetDateTime> {
    artist
        .metadata
        .as_ref()?
        .created_at
        .as_ref()
        .and_then(timestamp_to_date_time)
}

fn updated_at(artist: &Artist) -> Option<OffsetDateTime> {
    artist
        .metadata
        .as_ref()?
        .updated_at
        .as_ref()
        .and_then(timestamp_to_date_time)
}

#[tokio::test]
async fn create_then_get() {
    let fixture = Fixture::new();

    let created = fixture.create("Radiohead", "r.png").await.unwrap();
    assert!(ArtistId::parse(&created.id).is_some());
    assert_eq!(created_at(&created), Some(CREATED_AT));
    assert_eq!(updated_at(&created), Some(CREATED_AT));

    let fetched = fixture.get(&created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Radiohead");
    assert_eq!(fetched.image, "r.png");
}

#[tokio::test]
async fn create_ignores_server_fields() {
    let fixture = Fixture::new();
    let client_id = ArtistId::generate().to_string();

    let created = fixture
        .adapter
        .create_artist(Request::new(CreateArtistRequest {
            artist: Some(Artist {
                id: client_id.clone(),
                name: "Moby".into(),
                image: "moby.png".into(),
                metadata: Some(Metadata::default()),
            }),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_ne!(created.id, client_id);
    assert_eq!(created_at(&created), Some(CREATED_AT));
    assert_eq!(fixture.get(&client_id).await.unwrap_err().code(), Code::NotFound);
}

#[tokio::test]
async fn create_without_artist() {
    let fixture = Fixture::new();

    let status = fixture
        .adapter
        .create_artist(Request::new(CreateArtistRequest { artist: None }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(reason(&status), Some(ArtistErrorReason::RequiredFieldMissing));
    assert_eq!(fixture.puts(), 0);
}

#[tokio::test]
async fn create_publishes_event() {
    let fixture = Fixture::new();

    let created = fixture.create("Goldie", "goldie.png").await.unwrap();

    let published = fixture.notifier.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id.to_string(), created.id);
    assert_eq!(published[0].name, "Goldie");
}

#[tokio::test]
async fn create_survives_notifier_failure() {
    let fixture = Fixture::new();
    fixture.notifier.set_failing(true);

    let created = fixture.create("Aphex Twin", "aphex.png").await.unwrap();

    assert_eq!(fixture.get(&created.id).await.unwrap(), created);
    assert!(fixture.notifier.published().is_empty());
    assert!(fixture.observer.events().iter().any(|event| matches!(
        event,
        ArtistEvent::NotificationFailed { artist_id, .. }
            if artist_id.to_string() == created.id
    )));
}

#[tokio::test]
async fn create_storage_failure() {
    let fixture = Fixture::new();
    fixture.repository.failing_puts.store(true, Ordering::SeqCst);

    let status = fixture.create("Orbital", "orbital.png").await.unwrap_err();

    assert_eq!(status.code(), Code::Unavailable);
    assert!(fixture.notifier.published().is_empty());
    assert!(matches!(
        fixture.observer.events().as_slice(),
        [ArtistEvent::ArtistCreateFailed { .. }]
    ));
}

#[tokio::test]
async fn update_preserves_identity() {
    let fixture = Fixture::new();
    let created = fixture.create("Kraftwerk", "k.png").await.unwrap();

    let later = fixture.at(UPDATED_AT);
    let updated = later
        .update(Artist {
            id: created.id.clone(),
            name: "Kraftwerk (live)".into(),
            image: "k-live.png".into(),
            metadata: Some(Metadata::default()),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Kraftwerk (live)");
    assert_eq!(updated.image, "k-live.png");
    assert_eq!(created_at(&updated), Some(CREATED_AT));
    assert_eq!(updated_at(&updated), Some(UPDATED_AT));
    assert_eq!(later.get(&created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_malformed_id() {
    let fixture = Fixture::new();

    let status = fixture
        .update(Artist {
            id: "not-a-uuid".into(),
            name: "Nobody".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(reason(&status), Some(ArtistErrorReason::InvalidId));
    assert_eq!(fixture.puts(), 0);
}

#[tokio::test]
async fn update_unknown_id() {
    let fixture = Fixture::new();

    let status = fixture
        .update(Artist {
            id: ArtistId::generate().to_string(),
            name: "Nobody".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(reason(&status), Some(ArtistErrorReason::NotFound));
    assert_eq!(fixture.puts(), 0);
}

#[tokio::test]
async fn update_storage_failure() {
    let fixture = Fixture::new();
    let created = fixture.create("Massive Attack", "m.png").await.unwrap();
    fixture.repository.failing_puts.store(true, Ordering::SeqCst);

    let status = fixture
        .update(Artist {
            id: created.id.clone(),
            name: "Massive".into(),
            image: "massive.png".into(),
            metadata: None,
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(fixture.get(&created.id).await.unwrap(), created);
    assert!(
        !fixture
            .observer
            .events()
            .iter()
            .any(|event| matches!(event, ArtistEvent::ArtistUpdated { .. }))
    );
}

#[tokio::test]
async fn get_malformed_and_unknown() {
    let fixture = Fixture::new();

    let status = fixture.get("garbage").await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = fixture.get(&ArtistId::generate().to_string()).await.unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let fixture = Fixture::new();
    let created = fixture.create("Underworld", "u.png").await.unwrap();

    fixture.delete(&created.id).await.unwrap();
    fixture.delete(&created.id).await.unwrap();
    fixture
        .delete(&ArtistId::generate().to_string())
        .await
        .unwrap();

    assert_eq!(fixture.get(&created.id).await.unwrap_err().code(), Code::NotFound);
    assert_eq!(
        fixture.delete("nope").await.unwrap_err().code(),
        Code::InvalidArgument
    );
}

#[tokio::test]
async fn list_pages() {
    let repository = Arc::new(InstrumentedRepository {
        inner: MemoryArtistRepository::with_pagination(PaginationConfig {
            default_page_size: 2,
            max_page_size: 2,
        }),
        ..Default::default()
    });
    let fixture = Fixture::build(repository, CREATED_AT);
    for name in ["Air", "Cassius", "Daft Punk"] {
        fixture.create(name, "cover.png").await.unwrap();
    }

    let first = fixture
        .adapter
        .list_artists(Request::new(ListArtistsRequest {
            limit: 0,
            cursor: String::new(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(first.count, 2);
    assert_eq!(first.artists.len(), 2);
    assert!(!first.cursor.is_empty());

    let second = fixture
        .adapter
        .list_artists(Request::new(ListArtistsRequest {
            limit: 50,
            cursor: first.cursor.clone(),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(second.count, 1);
    assert!(second.cursor.is_empty());

    let mut names: Vec<_> = first
        .artists
        .iter()
        .chain(&second.artists)
        .map(|artist| artist.name.as_str())
        .collect();
    names.sort_unstable();
    assert_eq!(names, ["Air", "Cassius", "Daft Punk"]);

    assert!(fixture.observer.events().contains(&ArtistEvent::ArtistsListed {
        count: 2,
        cursor: first.cursor,
    }));
}

#[tokio::test]
async fn list_invalid_cursor() {
    let fixture = Fixture::new();

    let status = fixture
        .adapter
        .list_artists(Request::new(ListArtistsRequest {
            limit: 10,
            cursor: "page-two".into(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(reason(&status), Some(ArtistErrorReason::InvalidCursor));
}

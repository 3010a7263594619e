use chrono::Duration;
use photovault::application::commands::photos::SetProfilePhotoCommand;
use photovault::application::error::ApplicationError;
use photovault::domain::user::UserId;
use std::sync::Arc;

mod support;

fn command(url: &str) -> SetProfilePhotoCommand {
    SetProfilePhotoCommand {
        photo_url: url.to_string(),
    }
}

/// 同一ユーザーの並行リクエストでもプロフィール写真は 1 件のみ
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_set_profile_photo_leaves_exactly_one_row() {
    let app = support::build_test_app();
    let actor = support::actor(1);

    let mut handles = Vec::new();
    for i in 0..16 {
        let services = Arc::clone(&app.services);
        handles.push(tokio::spawn(async move {
            services
                .photo_commands
                .set_profile_photo(&actor, command(&format!("http://x/{i}.jpg")))
                .await
        }));
    }

    let mut created = 0;
    for handle in handles {
        let outcome = handle.await.unwrap().unwrap();
        if outcome.created {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    let rows = app.photos.profile_rows(UserId::new(1).unwrap());
    assert_eq!(rows.len(), 1);
    assert_eq!(app.photos.owned_by(UserId::new(1).unwrap()).len(), 1);
}

/// 所有者ロックにより直列化され、ストレージの一意制約に頼らない
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_set_profile_photo_is_serialised_by_the_owner_lock() {
    let app = support::build_test_app();
    let actor = support::actor(1);

    let mut handles = Vec::new();
    for i in 0..16 {
        let services = Arc::clone(&app.services);
        handles.push(tokio::spawn(async move {
            services
                .photo_commands
                .set_profile_photo(&actor, command(&format!("http://x/{i}.jpg")))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    // ロックなしでは全タスクが空の状態を観測して挿入を試みる
    assert_eq!(app.photos.profile_insert_attempts(), 1);
    assert_eq!(app.photos.profile_conflicts(), 0);
}

/// 異なるユーザーはそれぞれ自分のプロフィール写真を持つ
#[tokio::test]
async fn owners_are_independent() {
    let app = support::build_test_app();
    for owner in 1..=3 {
        let outcome = app
            .services
            .photo_commands
            .set_profile_photo(&support::actor(owner), command("http://x/me.jpg"))
            .await
            .unwrap();
        assert!(outcome.created);
    }
    for owner in 1..=3 {
        assert_eq!(app.photos.profile_rows(UserId::new(owner).unwrap()).len(), 1);
    }
}

/// 他プロセスに先を越された挿入は更新として一度だけ再試行される
#[tokio::test]
async fn insert_conflict_is_retried_as_update() {
    let photos = Arc::new(support::InMemoryPhotoRepo::with_stale_profile_reads(1));
    let app = support::build_test_app_with_photos(Arc::clone(&photos));
    let owner = UserId::new(1).unwrap();
    let existing = photos.seed(owner, "http://x/old.jpg", true, support::fixed_now());

    let outcome = app
        .services
        .photo_commands
        .set_profile_photo(&support::actor(1), command("http://x/new.jpg"))
        .await
        .unwrap();

    assert!(!outcome.created);
    assert_eq!(outcome.photo.id, i64::from(existing.id));
    assert_eq!(outcome.photo.photo_url, "http://x/new.jpg");
    assert_eq!(photos.profile_rows(owner).len(), 1);
    assert_eq!(photos.profile_conflicts(), 1);
}

/// 再試行後も競合が続く場合は不変条件違反として報告する
#[tokio::test]
async fn persistent_conflict_is_an_invariant_violation() {
    let photos = Arc::new(support::InMemoryPhotoRepo::with_stale_profile_reads(2));
    let app = support::build_test_app_with_photos(Arc::clone(&photos));
    let owner = UserId::new(1).unwrap();
    photos.seed(owner, "http://x/old.jpg", true, support::fixed_now());

    let err = app
        .services
        .photo_commands
        .set_profile_photo(&support::actor(1), command("http://x/new.jpg"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::InvariantViolation(_)));
    let rows = photos.profile_rows(owner);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].url.as_str(), "http://x/old.jpg");
}

/// 作成時刻が同じ重複行は ID の小さい方を残す
#[tokio::test]
async fn repair_breaks_created_at_ties_by_lowest_id() {
    let app = support::build_test_app();
    let owner = UserId::new(1).unwrap();
    let at = support::fixed_now() - Duration::days(1);
    let first = app.photos.seed(owner, "http://x/1.jpg", true, at);
    let second = app.photos.seed(owner, "http://x/2.jpg", true, at);
    let third = app.photos.seed(owner, "http://x/3.jpg", true, at);

    let outcome = app
        .services
        .photo_commands
        .set_profile_photo(&support::actor(1), command("http://x/kept.jpg"))
        .await
        .unwrap();

    assert_eq!(outcome.photo.id, i64::from(first.id));
    assert_eq!(outcome.photo.created_at, at);
    for demoted in [second.id, third.id] {
        let row = app.photos.get(i64::from(demoted)).unwrap();
        assert!(!row.is_profile);
    }
    assert_eq!(app.photos.owned_by(owner).len(), 3);
}

/// 他人の写真を操作しても所有者のプロフィール写真は変わらない
#[tokio::test]
async fn set_profile_photo_only_touches_the_callers_rows() {
    let app = support::build_test_app();
    let alice = UserId::new(1).unwrap();
    let bob = UserId::new(2).unwrap();
    let alices = app
        .photos
        .seed(alice, "http://x/alice.jpg", true, support::fixed_now());

    app.services
        .photo_commands
        .set_profile_photo(&support::actor(2), command("http://x/bob.jpg"))
        .await
        .unwrap();

    let alice_rows = app.photos.profile_rows(alice);
    assert_eq!(alice_rows.len(), 1);
    assert_eq!(alice_rows[0].id, alices.id);
    assert_eq!(alice_rows[0].url.as_str(), "http://x/alice.jpg");
    assert_eq!(app.photos.profile_rows(bob).len(), 1);
}

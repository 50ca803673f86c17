#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, token_for};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        learning_content::{ContentFields, Difficulty, Model as ContentModel},
        user::Model as UserModel,
    };
    use tower::ServiceExt;

    fn fields(title: &str, prerequisite_id: Option<i64>) -> ContentFields {
        ContentFields {
            title: title.into(),
            body: "body".into(),
            question: "question".into(),
            answer: "answer".into(),
            difficulty: Difficulty::Beginner,
            prerequisite_id,
            is_public: true,
        }
    }

    fn delete_request(token: &str, content_id: i64) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/learning-contents/{content_id}"))
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn author_delete_unlocks_dependants() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let author = UserModel::create(db, "author", "author@example.com", false)
            .await
            .unwrap();
        let base = ContentModel::create(db, author.id, &fields("base", None)).await.unwrap();
        let next = ContentModel::create(db, author.id, &fields("next", Some(base.id)))
            .await
            .unwrap();

        let response = app
            .oneshot(delete_request(&token_for(&author), base.id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        assert!(ContentModel::find_by_id(db, base.id).await.unwrap().is_none());
        let next = ContentModel::find_by_id(db, next.id).await.unwrap().unwrap();
        assert_eq!(next.prerequisite_id, None);
    }

    #[tokio::test]
    async fn non_author_delete_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let author = UserModel::create(db, "author", "author@example.com", false)
            .await
            .unwrap();
        let other = UserModel::create(db, "other", "other@example.com", false)
            .await
            .unwrap();
        let content = ContentModel::create(db, author.id, &fields("keep", None)).await.unwrap();

        let response = app
            .oneshot(delete_request(&token_for(&other), content.id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(ContentModel::find_by_id(db, content.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let author = UserModel::create(app_state.db(), "author", "author@example.com", false)
            .await
            .unwrap();

        let response = app
            .oneshot(delete_request(&token_for(&author), 31337))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app, token_for};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        learning_content::{ContentFields, Difficulty, Model as ContentModel},
        user::Model as UserModel,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn seed(db: &sea_orm::DatabaseConnection, author_id: i64, title: &str, prerequisite_id: Option<i64>) -> ContentModel {
        ContentModel::create(
            db,
            author_id,
            &ContentFields {
                title: title.into(),
                body: "body".into(),
                question: "question".into(),
                answer: "answer".into(),
                difficulty: Difficulty::Beginner,
                prerequisite_id,
                is_public: true,
            },
        )
        .await
        .unwrap()
    }

    fn edit_body(title: &str, prerequisite_id: Option<i64>) -> Value {
        json!({
            "title": title,
            "body": "new body",
            "question": "new question",
            "answer": "new answer",
            "difficulty": 3,
            "prerequisite_id": prerequisite_id,
            "is_public": false
        })
    }

    fn edit_request(token: &str, content_id: i64, body: Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/learning-contents/{content_id}"))
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn author_can_edit() {
        let (app, app_state) = make_test_app().await;
        let author = UserModel::create(app_state.db(), "author", "author@example.com", false)
            .await
            .unwrap();
        let content = seed(app_state.db(), author.id, "original", None).await;

        let response = app
            .oneshot(edit_request(&token_for(&author), content.id, edit_body("renamed", None)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["title"], "renamed");
        assert_eq!(json["data"]["difficulty"], 3);
        assert_eq!(json["data"]["is_public"], false);
    }

    #[tokio::test]
    async fn other_users_are_forbidden() {
        let (app, app_state) = make_test_app().await;
        let author = UserModel::create(app_state.db(), "author", "author@example.com", false)
            .await
            .unwrap();
        let intruder = UserModel::create(app_state.db(), "intruder", "intruder@example.com", false)
            .await
            .unwrap();
        let content = seed(app_state.db(), author.id, "original", None).await;

        let response = app
            .oneshot(edit_request(&token_for(&intruder), content.id, edit_body("hijacked", None)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let unchanged = ContentModel::find_by_id(app_state.db(), content.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.title, "original");
    }

    #[tokio::test]
    async fn prerequisite_cycle_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let author = UserModel::create(app_state.db(), "author", "author@example.com", false)
            .await
            .unwrap();
        let first = seed(app_state.db(), author.id, "first", None).await;
        let second = seed(app_state.db(), author.id, "second", Some(first.id)).await;

        let response = app
            .oneshot(edit_request(&token_for(&author), first.id, edit_body("first", Some(second.id))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["message"].as_str().unwrap().contains("cycle"));
    }

    #[tokio::test]
    async fn editing_missing_content_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let author = UserModel::create(app_state.db(), "author", "author@example.com", false)
            .await
            .unwrap();

        let response = app
            .oneshot(edit_request(&token_for(&author), 4242, edit_body("ghost", None)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

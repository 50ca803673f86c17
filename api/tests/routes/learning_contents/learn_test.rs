#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app, token_for};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        learning_content::{ContentFields, Difficulty, Model as ContentModel},
        quest::{Model as QuestModel, NewQuest, QuestCategory},
        user::Model as UserModel,
        user_learned_content::Model as LearnedModel,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct TestData {
        learner: UserModel,
        prerequisite: ContentModel,
        gated: ContentModel,
        open: ContentModel,
    }

    fn fields(title: &str, difficulty: Difficulty, prerequisite_id: Option<i64>) -> ContentFields {
        ContentFields {
            title: title.into(),
            body: format!("{title} body"),
            question: "What do you give a model?".into(),
            answer: "prompt".into(),
            difficulty,
            prerequisite_id,
            is_public: true,
        }
    }

    async fn quest(
        db: &sea_orm::DatabaseConnection,
        category: QuestCategory,
        points: i32,
        target_id: Option<i64>,
    ) -> QuestModel {
        QuestModel::create(
            db,
            &NewQuest {
                title: format!("{category} quest"),
                description: None,
                category,
                points,
                trigger_event: "content_learned".into(),
                target_id,
                is_active: true,
            },
        )
        .await
        .unwrap()
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let author = UserModel::create(db, "author", "author@example.com", false)
            .await
            .unwrap();
        let learner = UserModel::create(db, "learner", "learner@example.com", false)
            .await
            .unwrap();

        let prerequisite = ContentModel::create(db, author.id, &fields("P", Difficulty::Beginner, None))
            .await
            .unwrap();
        let gated = ContentModel::create(
            db,
            author.id,
            &fields("C", Difficulty::Intermediate, Some(prerequisite.id)),
        )
        .await
        .unwrap();
        let open = ContentModel::create(db, author.id, &fields("D", Difficulty::Beginner, None))
            .await
            .unwrap();

        quest(db, QuestCategory::Learning, 50, Some(gated.id)).await;
        quest(db, QuestCategory::Tutorial, 10, None).await;

        TestData {
            learner,
            prerequisite,
            gated,
            open,
        }
    }

    fn post(token: &str, uri: String, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json");
        match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    #[tokio::test]
    async fn correct_answer_unlocks_and_awards_once() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let data = setup_test_data(db).await;
        let token = token_for(&data.learner);

        LearnedModel::record(db, data.learner.id, data.prerequisite.id)
            .await
            .unwrap();

        let list = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/learning-contents")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(list).await;
        let unlearned: Vec<i64> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|c| c["is_learned"] == false)
            .map(|c| c["id"].as_i64().unwrap())
            .collect();
        assert_eq!(unlearned, vec![data.open.id, data.gated.id]);

        let answer_uri = format!("/api/learning-contents/{}/answer", data.gated.id);
        let response = app
            .clone()
            .oneshot(post(&token, answer_uri.clone(), Some(json!({ "answer": "prompt" }))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["correct"], true);
        assert_eq!(json["data"]["points"], 60);

        let response = app
            .oneshot(post(&token, answer_uri, Some(json!({ "answer": "prompt" }))))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["correct"], true);
        assert_eq!(json["data"]["points"], 0);

        let learner = UserModel::find_by_id(db, data.learner.id).await.unwrap().unwrap();
        assert_eq!(learner.total_points, 60);
    }

    #[tokio::test]
    async fn wrong_answer_writes_nothing() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let data = setup_test_data(db).await;

        let response = app
            .oneshot(post(
                &token_for(&data.learner),
                format!("/api/learning-contents/{}/answer", data.open.id),
                Some(json!({ "answer": "a spreadsheet" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["correct"], false);
        assert_eq!(json["data"]["points"], 0);

        assert!(!LearnedModel::is_learned(db, data.learner.id, data.open.id).await.unwrap());
        let learner = UserModel::find_by_id(db, data.learner.id).await.unwrap().unwrap();
        assert_eq!(learner.total_points, 0);
    }

    #[tokio::test]
    async fn learn_marks_content_and_awards_tutorial() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let data = setup_test_data(db).await;
        let token = token_for(&data.learner);
        let uri = format!("/api/learning-contents/{}/learn", data.open.id);

        let response = app.clone().oneshot(post(&token, uri.clone(), None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["points"], 10);
        assert!(LearnedModel::is_learned(db, data.learner.id, data.open.id).await.unwrap());

        let response = app.oneshot(post(&token, uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["points"], 0);
    }

    #[tokio::test]
    async fn learning_locked_content_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let data = setup_test_data(db).await;

        let response = app
            .oneshot(post(
                &token_for(&data.learner),
                format!("/api/learning-contents/{}/learn", data.gated.id),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(!LearnedModel::is_learned(db, data.learner.id, data.gated.id).await.unwrap());
    }
}

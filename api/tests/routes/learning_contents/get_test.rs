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
        user_learned_content::Model as LearnedModel,
    };
    use tower::ServiceExt;

    struct TestData {
        author: UserModel,
        learner: UserModel,
        basics: ContentModel,
        advanced: ContentModel,
        intro: ContentModel,
        draft: ContentModel,
    }

    fn fields(
        title: &str,
        difficulty: Difficulty,
        prerequisite_id: Option<i64>,
        is_public: bool,
    ) -> ContentFields {
        ContentFields {
            title: title.into(),
            body: format!("{title} body"),
            question: format!("{title}?"),
            answer: "secret".into(),
            difficulty,
            prerequisite_id,
            is_public,
        }
    }

    async fn setup_test_data(db: &sea_orm::DatabaseConnection) -> TestData {
        let author = UserModel::create(db, "author", "author@example.com", false)
            .await
            .unwrap();
        let learner = UserModel::create(db, "learner", "learner@example.com", false)
            .await
            .unwrap();

        let basics = ContentModel::create(db, author.id, &fields("basics", Difficulty::Intermediate, None, true))
            .await
            .unwrap();
        let advanced = ContentModel::create(
            db,
            author.id,
            &fields("advanced", Difficulty::Advanced, Some(basics.id), true),
        )
        .await
        .unwrap();
        let intro = ContentModel::create(db, author.id, &fields("intro", Difficulty::Beginner, None, true))
            .await
            .unwrap();
        let draft = ContentModel::create(db, author.id, &fields("draft", Difficulty::Beginner, None, false))
            .await
            .unwrap();

        TestData {
            author,
            learner,
            basics,
            advanced,
            intro,
            draft,
        }
    }

    fn get_request(token: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header("Authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn list_shows_unlocked_public_content_in_order() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let token = token_for(&data.learner);

        let response = app
            .clone()
            .oneshot(get_request(&token, "/api/learning-contents"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let items = json["data"].as_array().unwrap();
        let ids: Vec<i64> = items.iter().map(|c| c["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![data.intro.id, data.basics.id]);
        assert!(items.iter().all(|c| c.get("answer").is_none()));
        assert!(items.iter().all(|c| c["is_learned"] == false));

        LearnedModel::record(app_state.db(), data.learner.id, data.basics.id)
            .await
            .unwrap();

        let response = app
            .oneshot(get_request(&token, "/api/learning-contents"))
            .await
            .unwrap();
        let json = body_json(response).await;
        let items = json["data"].as_array().unwrap();
        let ids: Vec<i64> = items.iter().map(|c| c["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![data.intro.id, data.basics.id, data.advanced.id]);
        assert_eq!(items[1]["is_learned"], true);
    }

    #[tokio::test]
    async fn locked_content_is_forbidden() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(get_request(
                &token_for(&data.learner),
                &format!("/api/learning-contents/{}", data.advanced.id),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn private_content_is_visible_only_to_author() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;
        let uri = format!("/api/learning-contents/{}", data.draft.id);

        let response = app
            .clone()
            .oneshot(get_request(&token_for(&data.learner), &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = app
            .oneshot(get_request(&token_for(&data.author), &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["title"], "draft");
        assert_eq!(json["data"]["answer"], "secret");
    }

    #[tokio::test]
    async fn unlocked_detail_hides_answer_from_learners() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(get_request(
                &token_for(&data.learner),
                &format!("/api/learning-contents/{}", data.intro.id),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["question"], "intro?");
        assert!(json["data"].get("answer").is_none());
    }

    #[tokio::test]
    async fn missing_content_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let response = app
            .oneshot(get_request(&token_for(&data.learner), "/api/learning-contents/9999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

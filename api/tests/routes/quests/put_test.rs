#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app, token_for};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::{
        quest::{Model as QuestModel, NewQuest, QuestCategory},
        user::Model as UserModel,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn seed_quest(db: &sea_orm::DatabaseConnection) -> QuestModel {
        QuestModel::create(
            db,
            &NewQuest {
                title: "Read a trend".into(),
                description: None,
                category: QuestCategory::Weekly,
                points: 10,
                trigger_event: "trend_read".into(),
                target_id: None,
                is_active: true,
            },
        )
        .await
        .unwrap()
    }

    fn edit_request(token: &str, quest_id: i64, body: Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/quests/{quest_id}"))
            .header("Authorization", format!("Bearer {token}"))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn admin_can_deactivate_and_reprice() {
        let (app, app_state) = make_test_app().await;
        let admin = UserModel::create(app_state.db(), "admin", "admin@example.com", true)
            .await
            .unwrap();
        let quest = seed_quest(app_state.db()).await;

        let response = app
            .oneshot(edit_request(
                &token_for(&admin),
                quest.id,
                json!({ "points": 25, "is_active": false }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["points"], 25);
        assert_eq!(json["data"]["is_active"], false);
        assert_eq!(json["data"]["title"], "Read a trend");
    }

    #[tokio::test]
    async fn missing_quest_is_not_found() {
        let (app, app_state) = make_test_app().await;
        let admin = UserModel::create(app_state.db(), "admin", "admin@example.com", true)
            .await
            .unwrap();

        let response = app
            .oneshot(edit_request(&token_for(&admin), 404, json!({ "points": 1 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn player_cannot_edit() {
        let (app, app_state) = make_test_app().await;
        let player = UserModel::create(app_state.db(), "player", "player@example.com", false)
            .await
            .unwrap();
        let quest = seed_quest(app_state.db()).await;

        let response = app
            .oneshot(edit_request(&token_for(&player), quest.id, json!({ "points": 9999 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

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
    use db::quest_engine::QuestEngine;
    use tower::ServiceExt;

    fn new_quest(title: &str, category: QuestCategory, trigger: &str) -> NewQuest {
        NewQuest {
            title: title.into(),
            description: Some(format!("{title} description")),
            category,
            points: 5,
            trigger_event: trigger.into(),
            target_id: None,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn board_is_ordered_and_shows_clear_status() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();
        let player = UserModel::create(db, "player", "player@example.com", false)
            .await
            .unwrap();

        let weekly = QuestModel::create(db, &new_quest("Weekly", QuestCategory::Weekly, "trend_read"))
            .await
            .unwrap();
        let daily = QuestModel::create(db, &new_quest("Daily", QuestCategory::Daily, "report_liked"))
            .await
            .unwrap();
        let tutorial =
            QuestModel::create(db, &new_quest("Tutorial", QuestCategory::Tutorial, "profile_updated"))
                .await
                .unwrap();

        QuestEngine::new(app_state.db_clone())
            .check_and_award(player.id, "report_liked", None)
            .await
            .unwrap();

        let req = Request::builder()
            .method("GET")
            .uri("/api/quests")
            .header("Authorization", format!("Bearer {}", token_for(&player)))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let board = json["data"].as_array().unwrap();
        let ids: Vec<i64> = board.iter().map(|q| q["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![tutorial.id, daily.id, weekly.id]);

        assert_eq!(board[0]["category"], "tutorial");
        assert_eq!(board[0]["is_cleared"], false);
        assert!(board[0]["cleared_at"].is_null());
        assert_eq!(board[1]["is_cleared"], true);
        assert!(board[1]["cleared_at"].is_string());
    }
}

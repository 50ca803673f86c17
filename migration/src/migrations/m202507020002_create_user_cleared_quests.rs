use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202507020002_create_user_cleared_quests"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The (user_id, quest_id) key is what makes an award happen at most once.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("user_cleared_quests"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("quest_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("cleared_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .primary_key(
                        Index::create()
                            .col(Alias::new("user_id"))
                            .col(Alias::new("quest_id")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("user_cleared_quests"), Alias::new("user_id"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("user_cleared_quests"), Alias::new("quest_id"))
                            .to(Alias::new("quests"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("user_cleared_quests")).to_owned())
            .await
    }
}

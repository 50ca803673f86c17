use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202507020001_create_quests"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("quests"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("description")).text().null())
                    .col(
                        ColumnDef::new(Alias::new("category"))
                            .enumeration(
                                Alias::new("quest_category_type"),
                                vec![
                                    Alias::new("tutorial"),
                                    Alias::new("daily"),
                                    Alias::new("weekly"),
                                    Alias::new("learning"),
                                ],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("points")).integer().not_null().default(0))
                    .col(ColumnDef::new(Alias::new("trigger_event")).string().not_null())
                    .col(ColumnDef::new(Alias::new("target_id")).integer().null())
                    .col(ColumnDef::new(Alias::new("is_active")).boolean().not_null().default(true))
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("quests"), Alias::new("target_id"))
                            .to(Alias::new("learning_contents"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_quests_trigger_active")
                    .if_not_exists()
                    .table(Alias::new("quests"))
                    .col(Alias::new("trigger_event"))
                    .col(Alias::new("is_active"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("quests")).to_owned())
            .await
    }
}

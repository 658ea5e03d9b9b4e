use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Bulk reconciliation looks periods up by (start_date, college_id)
        manager
            .create_index(
                Index::create()
                    .name("idx_exam_periods_start_date_college_id")
                    .table(ExamPeriods::Table)
                    .col(ExamPeriods::StartDate)
                    .col(ExamPeriods::CollegeId)
                    .to_owned(),
            )
            .await?;

        // Exam-detail list filters
        manager
            .create_index(
                Index::create()
                    .name("idx_exam_details_room_id")
                    .table(ExamDetails::Table)
                    .col(ExamDetails::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exam_details_exam_date")
                    .table(ExamDetails::Table)
                    .col(ExamDetails::ExamDate)
                    .to_owned(),
            )
            .await?;

        // Modality list filters by course
        manager
            .create_index(
                Index::create()
                    .name("idx_modalities_course_id")
                    .table(Modalities::Table)
                    .col(Modalities::CourseId)
                    .to_owned(),
            )
            .await?;

        // Availability lookups by user
        manager
            .create_index(
                Index::create()
                    .name("idx_availabilities_user_id")
                    .table(Availabilities::Table)
                    .col(Availabilities::UserId)
                    .to_owned(),
            )
            .await?;

        // User-role filters
        manager
            .create_index(
                Index::create()
                    .name("idx_user_roles_user_id")
                    .table(UserRoles::Table)
                    .col(UserRoles::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_roles_role_id")
                    .table(UserRoles::Table)
                    .col(UserRoles::RoleId)
                    .to_owned(),
            )
            .await?;

        // History is listed most-recent-first, optionally per assignment
        manager
            .create_index(
                Index::create()
                    .name("idx_user_role_history_user_role_id")
                    .table(UserRoleHistory::Table)
                    .col(UserRoleHistory::UserRoleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_role_history_changed_at")
                    .table(UserRoleHistory::Table)
                    .col(UserRoleHistory::ChangedAt)
                    .to_owned(),
            )
            .await?;

        // Inbox is read per receiver
        manager
            .create_index(
                Index::create()
                    .name("idx_inbox_messages_receiver_id")
                    .table(InboxMessages::Table)
                    .col(InboxMessages::ReceiverId)
                    .to_owned(),
            )
            .await?;

        // Join-table lookups from the user side
        manager
            .create_index(
                Index::create()
                    .name("idx_course_users_user_id")
                    .table(CourseUsers::Table)
                    .col(CourseUsers::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_building_id")
                    .table(Rooms::Table)
                    .col(Rooms::BuildingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in [
            ("idx_exam_periods_start_date_college_id", ExamPeriods::Table.into_iden()),
            ("idx_exam_details_room_id", ExamDetails::Table.into_iden()),
            ("idx_exam_details_exam_date", ExamDetails::Table.into_iden()),
            ("idx_modalities_course_id", Modalities::Table.into_iden()),
            ("idx_availabilities_user_id", Availabilities::Table.into_iden()),
            ("idx_user_roles_user_id", UserRoles::Table.into_iden()),
            ("idx_user_roles_role_id", UserRoles::Table.into_iden()),
            ("idx_user_role_history_user_role_id", UserRoleHistory::Table.into_iden()),
            ("idx_user_role_history_changed_at", UserRoleHistory::Table.into_iden()),
            ("idx_inbox_messages_receiver_id", InboxMessages::Table.into_iden()),
            ("idx_course_users_user_id", CourseUsers::Table.into_iden()),
            ("idx_rooms_building_id", Rooms::Table.into_iden()),
        ] {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum ExamPeriods {
    Table,
    StartDate,
    CollegeId,
}

#[derive(Iden)]
enum ExamDetails {
    Table,
    RoomId,
    ExamDate,
}

#[derive(Iden)]
enum Modalities {
    Table,
    CourseId,
}

#[derive(Iden)]
enum Availabilities {
    Table,
    UserId,
}

#[derive(Iden)]
enum UserRoles {
    Table,
    UserId,
    RoleId,
}

#[derive(Iden)]
enum UserRoleHistory {
    Table,
    UserRoleId,
    ChangedAt,
}

#[derive(Iden)]
enum InboxMessages {
    Table,
    ReceiverId,
}

#[derive(Iden)]
enum CourseUsers {
    Table,
    UserId,
}

#[derive(Iden)]
enum Rooms {
    Table,
    BuildingId,
}

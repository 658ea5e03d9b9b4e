use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create colleges table
        manager
            .create_table(
                Table::create()
                    .table(Colleges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Colleges::CollegeId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Colleges::CollegeName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create departments table
        manager
            .create_table(
                Table::create()
                    .table(Departments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departments::DepartmentId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departments::DepartmentName).string())
                    .col(ColumnDef::new(Departments::CollegeId).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-departments-college_id")
                            .from(Departments::Table, Departments::CollegeId)
                            .to(Colleges::Table, Colleges::CollegeId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create programs table
        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Programs::ProgramId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Programs::ProgramName).string().not_null())
                    .col(ColumnDef::new(Programs::DepartmentId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-programs-department_id")
                            .from(Programs::Table, Programs::DepartmentId)
                            .to(Departments::Table, Departments::DepartmentId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create terms table
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Terms::TermId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Terms::TermName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create users table (ids come from the identity provider)
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::MiddleName).string())
                    .col(
                        ColumnDef::new(Users::EmailAddress)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::ContactNumber).string())
                    .col(ColumnDef::new(Users::AvatarUrl).string())
                    .col(ColumnDef::new(Users::Status).string())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Users::PasswordHash).string())
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::CourseId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::CourseName).string().not_null())
                    .col(ColumnDef::new(Courses::TermId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-courses-term_id")
                            .from(Courses::Table, Courses::TermId)
                            .to(Terms::Table, Terms::TermId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create course_users junction table (many-to-many with leader flag)
        manager
            .create_table(
                Table::create()
                    .table(CourseUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CourseUsers::CourseId).string().not_null())
                    .col(ColumnDef::new(CourseUsers::UserId).integer().not_null())
                    .col(ColumnDef::new(CourseUsers::CourseName).string())
                    .col(ColumnDef::new(CourseUsers::IsLeader).boolean())
                    .primary_key(
                        Index::create()
                            .col(CourseUsers::CourseId)
                            .col(CourseUsers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_users-course_id")
                            .from(CourseUsers::Table, CourseUsers::CourseId)
                            .to(Courses::Table, Courses::CourseId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-course_users-user_id")
                            .from(CourseUsers::Table, CourseUsers::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create section_courses table
        manager
            .create_table(
                Table::create()
                    .table(SectionCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SectionCourses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SectionCourses::CourseId).string().not_null())
                    .col(ColumnDef::new(SectionCourses::ProgramId).string().not_null())
                    .col(ColumnDef::new(SectionCourses::SectionName).string().not_null())
                    .col(
                        ColumnDef::new(SectionCourses::NumberOfStudents)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SectionCourses::YearLevel).string().not_null())
                    .col(ColumnDef::new(SectionCourses::TermId).integer().not_null())
                    .col(ColumnDef::new(SectionCourses::UserId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-section_courses-course_id")
                            .from(SectionCourses::Table, SectionCourses::CourseId)
                            .to(Courses::Table, Courses::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-section_courses-program_id")
                            .from(SectionCourses::Table, SectionCourses::ProgramId)
                            .to(Programs::Table, Programs::ProgramId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-section_courses-term_id")
                            .from(SectionCourses::Table, SectionCourses::TermId)
                            .to(Terms::Table, Terms::TermId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-section_courses-user_id")
                            .from(SectionCourses::Table, SectionCourses::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create buildings table
        manager
            .create_table(
                Table::create()
                    .table(Buildings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Buildings::BuildingId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Buildings::BuildingName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::RoomId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::RoomName).string().not_null())
                    .col(ColumnDef::new(Rooms::RoomType).string().not_null())
                    .col(ColumnDef::new(Rooms::RoomCapacity).integer().not_null())
                    .col(ColumnDef::new(Rooms::BuildingId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-rooms-building_id")
                            .from(Rooms::Table, Rooms::BuildingId)
                            .to(Buildings::Table, Buildings::BuildingId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create exam_periods table
        manager
            .create_table(
                Table::create()
                    .table(ExamPeriods::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamPeriods::ExamPeriodId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExamPeriods::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamPeriods::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExamPeriods::AcademicYear).string().not_null())
                    .col(ColumnDef::new(ExamPeriods::ExamCategory).string().not_null())
                    .col(ColumnDef::new(ExamPeriods::TermId).integer().not_null())
                    .col(ColumnDef::new(ExamPeriods::DepartmentId).string())
                    .col(ColumnDef::new(ExamPeriods::CollegeId).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_periods-term_id")
                            .from(ExamPeriods::Table, ExamPeriods::TermId)
                            .to(Terms::Table, Terms::TermId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_periods-department_id")
                            .from(ExamPeriods::Table, ExamPeriods::DepartmentId)
                            .to(Departments::Table, Departments::DepartmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_periods-college_id")
                            .from(ExamPeriods::Table, ExamPeriods::CollegeId)
                            .to(Colleges::Table, Colleges::CollegeId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create modalities table
        manager
            .create_table(
                Table::create()
                    .table(Modalities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Modalities::ModalityId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Modalities::ModalityType).string().not_null())
                    .col(ColumnDef::new(Modalities::RoomType).string().not_null())
                    .col(ColumnDef::new(Modalities::Remarks).text())
                    .col(ColumnDef::new(Modalities::CourseId).string().not_null())
                    .col(ColumnDef::new(Modalities::ProgramId).string().not_null())
                    .col(ColumnDef::new(Modalities::RoomId).string())
                    .col(ColumnDef::new(Modalities::UserId).integer().not_null())
                    .col(ColumnDef::new(Modalities::CreatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Modalities::SectionName).string())
                    .col(ColumnDef::new(Modalities::PossibleRooms).json())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-modalities-course_id")
                            .from(Modalities::Table, Modalities::CourseId)
                            .to(Courses::Table, Courses::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-modalities-room_id")
                            .from(Modalities::Table, Modalities::RoomId)
                            .to(Rooms::Table, Rooms::RoomId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-modalities-user_id")
                            .from(Modalities::Table, Modalities::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create exam_details table
        manager
            .create_table(
                Table::create()
                    .table(ExamDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamDetails::ExamDetailsId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamDetails::CourseId).string().not_null())
                    .col(ColumnDef::new(ExamDetails::ProgramId).string().not_null())
                    .col(ColumnDef::new(ExamDetails::RoomId).string().not_null())
                    .col(ColumnDef::new(ExamDetails::ModalityId).integer().not_null())
                    .col(ColumnDef::new(ExamDetails::ProctorId).integer())
                    .col(ColumnDef::new(ExamDetails::ExamPeriodId).integer().not_null())
                    .col(ColumnDef::new(ExamDetails::ExamDurationMinutes).integer())
                    .col(ColumnDef::new(ExamDetails::ExamStartTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(ExamDetails::ExamEndTime).timestamp_with_time_zone())
                    .col(ColumnDef::new(ExamDetails::ProctorTimeIn).timestamp_with_time_zone())
                    .col(ColumnDef::new(ExamDetails::ProctorTimeOut).timestamp_with_time_zone())
                    .col(ColumnDef::new(ExamDetails::SectionName).string())
                    .col(ColumnDef::new(ExamDetails::AcademicYear).string())
                    .col(ColumnDef::new(ExamDetails::Semester).string())
                    .col(ColumnDef::new(ExamDetails::ExamCategory).string())
                    .col(ColumnDef::new(ExamDetails::ExamPeriodLabel).string())
                    .col(ColumnDef::new(ExamDetails::ExamDate).string())
                    .col(ColumnDef::new(ExamDetails::CollegeName).string())
                    .col(ColumnDef::new(ExamDetails::BuildingName).string())
                    .col(ColumnDef::new(ExamDetails::InstructorId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_details-room_id")
                            .from(ExamDetails::Table, ExamDetails::RoomId)
                            .to(Rooms::Table, Rooms::RoomId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_details-modality_id")
                            .from(ExamDetails::Table, ExamDetails::ModalityId)
                            .to(Modalities::Table, Modalities::ModalityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_details-proctor_id")
                            .from(ExamDetails::Table, ExamDetails::ProctorId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-exam_details-exam_period_id")
                            .from(ExamDetails::Table, ExamDetails::ExamPeriodId)
                            .to(ExamPeriods::Table, ExamPeriods::ExamPeriodId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create availabilities table
        manager
            .create_table(
                Table::create()
                    .table(Availabilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Availabilities::AvailabilityId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Availabilities::Day).date().not_null())
                    .col(ColumnDef::new(Availabilities::TimeSlot).string().not_null())
                    .col(ColumnDef::new(Availabilities::Status).string().not_null())
                    .col(ColumnDef::new(Availabilities::Remarks).text())
                    .col(ColumnDef::new(Availabilities::UserId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-availabilities-user_id")
                            .from(Availabilities::Table, Availabilities::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create roles table
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::RoleId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::RoleName).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create user_roles table
        manager
            .create_table(
                Table::create()
                    .table(UserRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRoles::UserRoleId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserRoles::RoleId).big_integer())
                    .col(ColumnDef::new(UserRoles::UserId).integer().not_null())
                    .col(ColumnDef::new(UserRoles::CollegeId).string())
                    .col(ColumnDef::new(UserRoles::DepartmentId).string())
                    .col(ColumnDef::new(UserRoles::CreatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(UserRoles::DateStart).timestamp_with_time_zone())
                    .col(ColumnDef::new(UserRoles::DateEnded).timestamp_with_time_zone())
                    .col(ColumnDef::new(UserRoles::Status).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_roles-role_id")
                            .from(UserRoles::Table, UserRoles::RoleId)
                            .to(Roles::Table, Roles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_roles-user_id")
                            .from(UserRoles::Table, UserRoles::UserId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_roles-college_id")
                            .from(UserRoles::Table, UserRoles::CollegeId)
                            .to(Colleges::Table, Colleges::CollegeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_roles-department_id")
                            .from(UserRoles::Table, UserRoles::DepartmentId)
                            .to(Departments::Table, Departments::DepartmentId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create user_role_history table (append-only, no foreign keys so
        // history outlives the rows it records)
        manager
            .create_table(
                Table::create()
                    .table(UserRoleHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRoleHistory::HistoryId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserRoleHistory::UserRoleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserRoleHistory::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserRoleHistory::RoleId).integer())
                    .col(ColumnDef::new(UserRoleHistory::CollegeId).string())
                    .col(ColumnDef::new(UserRoleHistory::DepartmentId).string())
                    .col(ColumnDef::new(UserRoleHistory::DateStart).date())
                    .col(ColumnDef::new(UserRoleHistory::DateEnded).date())
                    .col(ColumnDef::new(UserRoleHistory::Status).string())
                    .col(ColumnDef::new(UserRoleHistory::Action).string())
                    .col(ColumnDef::new(UserRoleHistory::ChangedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create inbox_messages table
        manager
            .create_table(
                Table::create()
                    .table(InboxMessages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InboxMessages::MessageId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InboxMessages::Subject).text())
                    .col(ColumnDef::new(InboxMessages::Body).text())
                    .col(ColumnDef::new(InboxMessages::IsRead).boolean())
                    .col(ColumnDef::new(InboxMessages::IsDeleted).boolean())
                    .col(
                        ColumnDef::new(InboxMessages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InboxMessages::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(InboxMessages::SenderId).integer())
                    .col(ColumnDef::new(InboxMessages::ReceiverId).integer())
                    .col(ColumnDef::new(InboxMessages::SenderRoleId).integer())
                    .col(ColumnDef::new(InboxMessages::ReceiverRoleId).integer())
                    .col(ColumnDef::new(InboxMessages::Attachments).json())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inbox_messages-sender_id")
                            .from(InboxMessages::Table, InboxMessages::SenderId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inbox_messages-receiver_id")
                            .from(InboxMessages::Table, InboxMessages::ReceiverId)
                            .to(Users::Table, Users::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inbox_messages-sender_role_id")
                            .from(InboxMessages::Table, InboxMessages::SenderRoleId)
                            .to(UserRoles::Table, UserRoles::UserRoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-inbox_messages-receiver_role_id")
                            .from(InboxMessages::Table, InboxMessages::ReceiverRoleId)
                            .to(UserRoles::Table, UserRoles::UserRoleId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create replies table
        manager
            .create_table(
                Table::create()
                    .table(Replies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Replies::ReplyId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Replies::MessageId).integer())
                    .col(ColumnDef::new(Replies::SenderId).integer())
                    .col(ColumnDef::new(Replies::Body).text())
                    .col(ColumnDef::new(Replies::CreatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Replies::Attachments).json())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-replies-message_id")
                            .from(Replies::Table, Replies::MessageId)
                            .to(InboxMessages::Table, InboxMessages::MessageId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-replies-sender_id")
                            .from(Replies::Table, Replies::SenderId)
                            .to(Users::Table, Users::UserId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse dependency order
        manager
            .drop_table(Table::drop().table(Replies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InboxMessages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoleHistory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRoles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Availabilities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modalities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamPeriods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Buildings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SectionCourses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Terms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Colleges::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Colleges {
    Table,
    CollegeId,
    CollegeName,
}

#[derive(Iden)]
enum Departments {
    Table,
    DepartmentId,
    DepartmentName,
    CollegeId,
}

#[derive(Iden)]
enum Programs {
    Table,
    ProgramId,
    ProgramName,
    DepartmentId,
}

#[derive(Iden)]
enum Terms {
    Table,
    TermId,
    TermName,
}

#[derive(Iden)]
enum Users {
    Table,
    UserId,
    FirstName,
    LastName,
    MiddleName,
    EmailAddress,
    ContactNumber,
    AvatarUrl,
    Status,
    CreatedAt,
    PasswordHash,
}

#[derive(Iden)]
enum Courses {
    Table,
    CourseId,
    CourseName,
    TermId,
}

#[derive(Iden)]
enum CourseUsers {
    Table,
    CourseId,
    UserId,
    CourseName,
    IsLeader,
}

#[derive(Iden)]
enum SectionCourses {
    Table,
    Id,
    CourseId,
    ProgramId,
    SectionName,
    NumberOfStudents,
    YearLevel,
    TermId,
    UserId,
}

#[derive(Iden)]
enum Buildings {
    Table,
    BuildingId,
    BuildingName,
}

#[derive(Iden)]
enum Rooms {
    Table,
    RoomId,
    RoomName,
    RoomType,
    RoomCapacity,
    BuildingId,
}

#[derive(Iden)]
enum ExamPeriods {
    Table,
    ExamPeriodId,
    StartDate,
    EndDate,
    AcademicYear,
    ExamCategory,
    TermId,
    DepartmentId,
    CollegeId,
}

#[derive(Iden)]
enum Modalities {
    Table,
    ModalityId,
    ModalityType,
    RoomType,
    Remarks,
    CourseId,
    ProgramId,
    RoomId,
    UserId,
    CreatedAt,
    SectionName,
    PossibleRooms,
}

#[derive(Iden)]
enum ExamDetails {
    Table,
    ExamDetailsId,
    CourseId,
    ProgramId,
    RoomId,
    ModalityId,
    ProctorId,
    ExamPeriodId,
    ExamDurationMinutes,
    ExamStartTime,
    ExamEndTime,
    ProctorTimeIn,
    ProctorTimeOut,
    SectionName,
    AcademicYear,
    Semester,
    ExamCategory,
    ExamPeriodLabel,
    ExamDate,
    CollegeName,
    BuildingName,
    InstructorId,
}

#[derive(Iden)]
enum Availabilities {
    Table,
    AvailabilityId,
    Day,
    TimeSlot,
    Status,
    Remarks,
    UserId,
}

#[derive(Iden)]
enum Roles {
    Table,
    RoleId,
    RoleName,
}

#[derive(Iden)]
enum UserRoles {
    Table,
    UserRoleId,
    RoleId,
    UserId,
    CollegeId,
    DepartmentId,
    CreatedAt,
    DateStart,
    DateEnded,
    Status,
}

#[derive(Iden)]
enum UserRoleHistory {
    Table,
    HistoryId,
    UserRoleId,
    UserId,
    RoleId,
    CollegeId,
    DepartmentId,
    DateStart,
    DateEnded,
    Status,
    Action,
    ChangedAt,
}

#[derive(Iden)]
enum InboxMessages {
    Table,
    MessageId,
    Subject,
    Body,
    IsRead,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
    SenderId,
    ReceiverId,
    SenderRoleId,
    ReceiverRoleId,
    Attachments,
}

#[derive(Iden)]
enum Replies {
    Table,
    ReplyId,
    MessageId,
    SenderId,
    Body,
    CreatedAt,
    Attachments,
}

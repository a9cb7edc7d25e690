use crate::models::{User, Workout};

/// Entity staged for insertion, kept in staging order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedEntity {
    User(User),
    Workout(Workout),
}

/// A batch of inserts committed all-or-nothing by [`crate::AccountStore::commit`].
///
/// Nothing is written while staging; the store flushes the whole batch once
/// and either every row becomes visible or none does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitOfWork {
    staged: Vec<StagedEntity>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_user(&mut self, user: User) -> &mut Self {
        self.staged.push(StagedEntity::User(user));
        self
    }

    pub fn stage_workout(&mut self, workout: Workout) -> &mut Self {
        self.staged.push(StagedEntity::Workout(workout));
        self
    }

    pub fn staged(&self) -> &[StagedEntity] {
        &self.staged
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn into_staged(self) -> Vec<StagedEntity> {
        self.staged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_preserves_order() {
        let user = User::new("lifter@example.com", "hash");
        let push = Workout::new(user.user_id, "Push");
        let pull = Workout::new(user.user_id, "Pull");

        let mut unit = UnitOfWork::new();
        unit.stage_user(user.clone())
            .stage_workout(push.clone())
            .stage_workout(pull.clone());

        assert_eq!(
            unit.into_staged(),
            vec![
                StagedEntity::User(user),
                StagedEntity::Workout(push),
                StagedEntity::Workout(pull),
            ]
        );
    }
}

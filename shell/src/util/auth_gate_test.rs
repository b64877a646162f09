use any_spawner::Executor;
use tokio::task::LocalSet;

use super::*;
use crate::state::app_model::ApplicationState;
use crate::state::auth::{AuthState, UserRecord};
use crate::state::auth_gate::AuthGatePath;
use crate::state::loading::LoadingState;

fn signed_in(id: i64) -> AuthState {
    AuthState { user: Some(UserRecord::new(id)) }
}

#[tokio::test]
async fn reactive_path_follows_user_identity() {
    _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();

    LocalSet::new()
        .run_until(async {
            let auth = RwSignal::new(AuthState::default());
            let store = ShellStore::new(
                RwSignal::new(ApplicationState::default()),
                auth,
                RwSignal::new(LoadingState::default()),
            );
            let mode = Memo::new(|_| QueryMode::SignIn);
            let gate = install_auth_gate(store, mode);
            assert!(gate.with_untracked(|g| g.last_write().is_none()));

            Executor::tick().await;
            let write = gate.with_untracked(AuthGate::last_write).unwrap();
            assert_eq!(write.path, AuthGatePath::Reactive);
            assert!(write.value);

            auth.set(signed_in(1));
            Executor::tick().await;
            assert!(!gate.with_untracked(AuthGate::auth_loader));

            // Sign-in mode does not reach the reactive path.
            auth.set(AuthState::default());
            Executor::tick().await;
            assert!(gate.with_untracked(AuthGate::auth_loader));
        })
        .await;
}

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use screen_stake::{ScreenStakeContract, ScreenStakeContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Open {
        amount: i64,
        duration: u64,
        allowed_time: u64,
    },
    Settle {
        screen_time: u64,
    },
    Preview {
        screen_time: u64,
    },
    Advance {
        seconds: u32,
    },
    Sweep,
    Deposit {
        amount: u32,
    },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(ScreenStakeContract, ());
    let client = ScreenStakeContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &token);
    StellarAssetClient::new(&env, &token).mint(&owner, &i128::from(i64::MAX));

    // Index 0 is the owner; the rest are users or intruders depending on the call.
    let mut actors = vec![owner.clone()];
    for _ in 0..4 {
        actors.push(Address::generate(&env));
    }

    // Looking for panics (overflow, unchecked storage reads), not correctness;
    // the property suite covers the latter.
    let mut now = 0u64;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &actors[i % 2];
        let user = &actors[1 + i % (actors.len() - 1)];
        match action {
            FuzzAction::Open {
                amount,
                duration,
                allowed_time,
            } => {
                let amt = i128::from(amount);
                let _ = client.try_open_stake(caller, user, &amt, &duration, &allowed_time);
            }
            FuzzAction::Settle { screen_time } => {
                let _ = client.try_settle(caller, user, &screen_time);
            }
            FuzzAction::Preview { screen_time } => {
                let _ = client.try_preview_reward(user, &screen_time);
            }
            FuzzAction::Advance { seconds } => {
                now = now.saturating_add(u64::from(seconds));
                env.ledger().set_timestamp(now);
            }
            FuzzAction::Sweep => {
                let _ = client.try_sweep_balance(caller);
            }
            FuzzAction::Deposit { amount } => {
                let _ = client.try_receive_deposit(&owner, &i128::from(amount));
            }
        }
    }
});

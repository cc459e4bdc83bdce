use crate::{
    auth::TokenService,
    db::{dao::DaoContext, store::Store},
    services::{
        billing_service::BillingService, food_service::FoodService,
        invoice_service::InvoiceService, menu_service::MenuService,
        order_item_service::OrderItemService, order_service::OrderService,
        table_service::TableService, user_service::UserService,
    },
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    tokens: TokenService,
}

impl ServiceContext {
    pub fn new(store: &Store, tokens: &TokenService) -> Self {
        Self {
            daos: DaoContext::new(store),
            tokens: tokens.clone(),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.store, &state.tokens)
    }

    pub fn food(&self) -> FoodService {
        FoodService::new(self.daos.food(), self.daos.menu())
    }

    pub fn menu(&self) -> MenuService {
        MenuService::new(self.daos.menu())
    }

    pub fn table(&self) -> TableService {
        TableService::new(self.daos.table())
    }

    pub fn order(&self) -> OrderService {
        OrderService::new(self.daos.order(), self.daos.table())
    }

    pub fn order_item(&self) -> OrderItemService {
        OrderItemService::new(self.daos.order_item(), self.order())
    }

    pub fn billing(&self) -> BillingService {
        BillingService::new(self.daos.order_item())
    }

    pub fn invoice(&self) -> InvoiceService {
        InvoiceService::new(self.daos.invoice(), self.daos.order(), self.billing())
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user(), self.tokens.clone())
    }
}

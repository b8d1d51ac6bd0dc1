// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api_test;
pub mod association_test;
pub mod bootstrap_test;
pub mod news_crud_test;
pub mod query_test;

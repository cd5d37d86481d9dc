// Domain layer: conversion request model. No external dependencies.

pub mod model;
